//! Statement tree for generated marshalling code.
//!
//! Type descriptors append [`Statement`]s to a [`StatementBlock`]; the
//! printer turns the finished tree into Java source. Types inside the
//! tree are plain rendered names (`java.util.List<java.lang.String>`,
//! `int[]`), so this crate knows nothing about the type registry.

use std::fmt;

/// A named, typed local in generated code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Rendered type of the variable.
    pub ty: String,
    /// Identifier used in generated source.
    pub name: String,
}

impl Variable {
    /// Create a variable.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Variable {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Create a variable whose name is derived from this one
    /// (`v` + `_size` -> `v_size`).
    pub fn derived(&self, ty: impl Into<String>, suffix: &str) -> Self {
        Variable::new(ty, format!("{}_{suffix}", self.name))
    }

    /// Reference this variable as an expression.
    #[inline]
    pub fn expr(&self) -> Expression {
        Expression::Var(self.clone())
    }
}

/// Comparison operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Ge,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expression in generated code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Verbatim source text (`null`, `0`, `this.getClass()`).
    Literal(String),
    /// A local variable.
    Var(Variable),
    /// A class used as a static receiver (`android.text.TextUtils`).
    Class(String),
    /// Field access: `target.name`.
    Field {
        target: Box<Expression>,
        name: String,
    },
    /// Method call; `target` is `None` for unqualified calls.
    Call {
        target: Option<Box<Expression>>,
        method: String,
        args: Vec<Expression>,
    },
    /// Binary comparison.
    Comparison {
        lhs: Box<Expression>,
        op: CompareOp,
        rhs: Box<Expression>,
    },
    /// Conditional expression: `cond ? a : b`.
    Ternary {
        condition: Box<Expression>,
        if_true: Box<Expression>,
        if_false: Box<Expression>,
    },
    /// Cast: `(ty) value`.
    Cast { ty: String, value: Box<Expression> },
    /// Object allocation: `new ty(args)`.
    New { ty: String, args: Vec<Expression> },
    /// Array allocation: `new elem[size]`.
    NewArray {
        elem_ty: String,
        size: Box<Expression>,
    },
    /// Array element: `array[index]`.
    Index {
        array: Box<Expression>,
        index: Box<Expression>,
    },
}

impl Expression {
    /// The `null` literal.
    pub fn null() -> Self {
        Expression::Literal("null".to_owned())
    }

    /// An integer literal.
    pub fn int(value: i64) -> Self {
        Expression::Literal(value.to_string())
    }

    /// Verbatim source text.
    pub fn literal(text: impl Into<String>) -> Self {
        Expression::Literal(text.into())
    }

    /// A static class receiver.
    pub fn class(name: impl Into<String>) -> Self {
        Expression::Class(name.into())
    }

    /// `target.method(args)`.
    pub fn call(target: Expression, method: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Call {
            target: Some(Box::new(target)),
            method: method.into(),
            args,
        }
    }

    /// `target.name`.
    pub fn field(target: Expression, name: impl Into<String>) -> Self {
        Expression::Field {
            target: Box::new(target),
            name: name.into(),
        }
    }

    /// `lhs op rhs`.
    pub fn compare(lhs: Expression, op: CompareOp, rhs: Expression) -> Self {
        Expression::Comparison {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    /// `condition ? if_true : if_false`.
    pub fn ternary(condition: Expression, if_true: Expression, if_false: Expression) -> Self {
        Expression::Ternary {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    /// `(ty) value`.
    pub fn cast(ty: impl Into<String>, value: Expression) -> Self {
        Expression::Cast {
            ty: ty.into(),
            value: Box::new(value),
        }
    }

    /// `new ty(args)`.
    pub fn new_object(ty: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::New {
            ty: ty.into(),
            args,
        }
    }

    /// `new elem_ty[size]`.
    pub fn new_array(elem_ty: impl Into<String>, size: Expression) -> Self {
        Expression::NewArray {
            elem_ty: elem_ty.into(),
            size: Box::new(size),
        }
    }

    /// `array[index]`.
    pub fn index(array: Expression, index: Expression) -> Self {
        Expression::Index {
            array: Box::new(array),
            index: Box::new(index),
        }
    }
}

/// A statement in generated code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Statement {
    /// An expression evaluated for its effect.
    Expr(Expression),
    /// `ty name;` or `ty name = init;`.
    Declare {
        var: Variable,
        init: Option<Expression>,
    },
    /// `target = value;`.
    Assign { target: Expression, value: Expression },
    /// `if (condition) { .. } else { .. }`.
    If {
        condition: Expression,
        then_block: StatementBlock,
        else_block: Option<StatementBlock>,
    },
    /// `for (int index = 0; index < count; index++) { .. }`.
    For {
        index: Variable,
        count: Expression,
        body: StatementBlock,
    },
    /// `for (ty item : collection) { .. }`.
    ForEach {
        item: Variable,
        collection: Expression,
        body: StatementBlock,
    },
}

impl Statement {
    /// Declare `var` with an initializer.
    pub fn declare(var: &Variable, init: Expression) -> Self {
        Statement::Declare {
            var: var.clone(),
            init: Some(init),
        }
    }

    /// Declare `var` without an initializer.
    pub fn declare_uninit(var: &Variable) -> Self {
        Statement::Declare {
            var: var.clone(),
            init: None,
        }
    }

    /// Assign to a variable.
    pub fn assign(var: &Variable, value: Expression) -> Self {
        Statement::Assign {
            target: var.expr(),
            value,
        }
    }
}

/// An ordered sequence of statements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StatementBlock {
    statements: Vec<Statement>,
}

impl StatementBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement.
    #[inline]
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Append an expression statement.
    #[inline]
    pub fn push_expr(&mut self, expr: Expression) {
        self.statements.push(Statement::Expr(expr));
    }

    /// Append every statement of `other`.
    pub fn append(&mut self, other: StatementBlock) {
        self.statements.extend(other.statements);
    }

    #[inline]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }
}

impl From<Vec<Statement>> for StatementBlock {
    fn from(statements: Vec<Statement>) -> Self {
        StatementBlock { statements }
    }
}

impl<'a> IntoIterator for &'a StatementBlock {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

#[cfg(test)]
mod tests;
