//! Read-only traversal of the statement tree.
//!
//! Default `visit_*` methods call the matching `walk_*` function, so an
//! implementation only overrides the nodes it cares about.

use rustc_hash::FxHashSet;

use crate::ast::{Expression, Statement, StatementBlock, Variable};

pub trait Visitor<'ast> {
    fn visit_block(&mut self, block: &'ast StatementBlock) {
        walk_block(self, block);
    }

    fn visit_statement(&mut self, stmt: &'ast Statement) {
        walk_statement(self, stmt);
    }

    fn visit_expression(&mut self, expr: &'ast Expression) {
        walk_expression(self, expr);
    }

    /// Called for every variable, both declared and referenced.
    fn visit_variable(&mut self, _var: &'ast Variable) {}
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast StatementBlock) {
    for stmt in block {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Statement) {
    match stmt {
        Statement::Expr(expr) => visitor.visit_expression(expr),
        Statement::Declare { var, init } => {
            visitor.visit_variable(var);
            if let Some(init) = init {
                visitor.visit_expression(init);
            }
        }
        Statement::Assign { target, value } => {
            visitor.visit_expression(target);
            visitor.visit_expression(value);
        }
        Statement::If {
            condition,
            then_block,
            else_block,
        } => {
            visitor.visit_expression(condition);
            visitor.visit_block(then_block);
            if let Some(else_block) = else_block {
                visitor.visit_block(else_block);
            }
        }
        Statement::For { index, count, body } => {
            visitor.visit_variable(index);
            visitor.visit_expression(count);
            visitor.visit_block(body);
        }
        Statement::ForEach {
            item,
            collection,
            body,
        } => {
            visitor.visit_variable(item);
            visitor.visit_expression(collection);
            visitor.visit_block(body);
        }
    }
}

pub fn walk_expression<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expression) {
    match expr {
        Expression::Literal(_) | Expression::Class(_) => {}
        Expression::Var(var) => visitor.visit_variable(var),
        Expression::Field { target, .. } => visitor.visit_expression(target),
        Expression::Call { target, args, .. } => {
            if let Some(target) = target {
                visitor.visit_expression(target);
            }
            for arg in args {
                visitor.visit_expression(arg);
            }
        }
        Expression::Comparison { lhs, rhs, .. } => {
            visitor.visit_expression(lhs);
            visitor.visit_expression(rhs);
        }
        Expression::Ternary {
            condition,
            if_true,
            if_false,
        } => {
            visitor.visit_expression(condition);
            visitor.visit_expression(if_true);
            visitor.visit_expression(if_false);
        }
        Expression::Cast { value, .. } => visitor.visit_expression(value),
        Expression::New { args, .. } => {
            for arg in args {
                visitor.visit_expression(arg);
            }
        }
        Expression::NewArray { size, .. } => visitor.visit_expression(size),
        Expression::Index { array, index } => {
            visitor.visit_expression(array);
            visitor.visit_expression(index);
        }
    }
}

#[derive(Default)]
struct VariableCollector<'ast> {
    seen: FxHashSet<&'ast str>,
}

impl<'ast> Visitor<'ast> for VariableCollector<'ast> {
    fn visit_variable(&mut self, var: &'ast Variable) {
        self.seen.insert(var.name.as_str());
    }
}

/// Names of every variable a block declares or references.
pub fn variable_names(block: &StatementBlock) -> FxHashSet<&str> {
    let mut collector = VariableCollector::default();
    collector.visit_block(block);
    collector.seen
}

#[derive(Default)]
struct TypeCollector<'ast> {
    seen: FxHashSet<(&'ast str, &'ast str)>,
}

impl<'ast> Visitor<'ast> for TypeCollector<'ast> {
    fn visit_variable(&mut self, var: &'ast Variable) {
        self.seen.insert((var.name.as_str(), var.ty.as_str()));
    }
}

/// `(name, type)` pairs of every variable a block declares or references.
pub fn typed_variables(block: &StatementBlock) -> FxHashSet<(&str, &str)> {
    let mut collector = TypeCollector::default();
    collector.visit_block(block);
    collector.seen
}
