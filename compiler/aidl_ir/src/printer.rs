//! Java source printer for the statement tree.
//!
//! Output favours unambiguous parenthesization over minimal punctuation,
//! matching what hand-maintained binder stubs look like:
//! `((v != null) ? (v.asBinder()) : (null))`.

use std::fmt::{self, Write};

use crate::ast::{Expression, Statement, StatementBlock};

const INDENT: &str = "    ";

/// Renders statements as Java source with four-space indentation.
pub struct JavaPrinter {
    indent: usize,
    output: String,
}

impl Default for JavaPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaPrinter {
    pub fn new() -> Self {
        JavaPrinter {
            indent: 0,
            output: String::with_capacity(512),
        }
    }

    /// Start at the given indentation depth.
    pub fn with_indent(indent: usize) -> Self {
        JavaPrinter {
            indent,
            output: String::with_capacity(512),
        }
    }

    /// Consume the printer and return the rendered text.
    pub fn finish(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
    }

    fn line(&mut self, text: &str) {
        self.write_indent();
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Print every statement of a block.
    pub fn print_block(&mut self, block: &StatementBlock) {
        for stmt in block {
            self.print_statement(stmt);
        }
    }

    /// Print one statement (and its nested blocks).
    pub fn print_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Expr(expr) => self.line(&format!("{expr};")),
            Statement::Declare { var, init: None } => {
                self.line(&format!("{} {};", var.ty, var.name));
            }
            Statement::Declare {
                var,
                init: Some(init),
            } => self.line(&format!("{} {} = {init};", var.ty, var.name)),
            Statement::Assign { target, value } => self.line(&format!("{target} = {value};")),
            Statement::If {
                condition,
                then_block,
                else_block,
            } => {
                self.line(&format!("if ({condition}) {{"));
                self.nested(then_block);
                if let Some(else_block) = else_block {
                    self.line("}");
                    self.line("else {");
                    self.nested(else_block);
                }
                self.line("}");
            }
            Statement::For { index, count, body } => {
                let i = &index.name;
                self.line(&format!(
                    "for ({} {i} = 0; {i} < {count}; {i}++) {{",
                    index.ty
                ));
                self.nested(body);
                self.line("}");
            }
            Statement::ForEach {
                item,
                collection,
                body,
            } => {
                self.line(&format!("for ({} {} : {collection}) {{", item.ty, item.name));
                self.nested(body);
                self.line("}");
            }
        }
    }

    fn nested(&mut self, block: &StatementBlock) {
        self.indent += 1;
        self.print_block(block);
        self.indent -= 1;
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expression]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(text) | Expression::Class(text) => f.write_str(text),
            Expression::Var(var) => f.write_str(&var.name),
            Expression::Field { target, name } => write!(f, "{target}.{name}"),
            Expression::Call {
                target,
                method,
                args,
            } => {
                if let Some(target) = target {
                    write!(f, "{target}.")?;
                }
                write!(f, "{method}(")?;
                write_args(f, args)?;
                f.write_char(')')
            }
            Expression::Comparison { lhs, op, rhs } => write!(f, "({lhs} {op} {rhs})"),
            Expression::Ternary {
                condition,
                if_true,
                if_false,
            } => write!(f, "(({condition}) ? ({if_true}) : ({if_false}))"),
            Expression::Cast { ty, value } => write!(f, "(({ty}) {value})"),
            Expression::New { ty, args } => {
                write!(f, "new {ty}(")?;
                write_args(f, args)?;
                f.write_char(')')
            }
            Expression::NewArray { elem_ty, size } => write!(f, "new {elem_ty}[{size}]"),
            Expression::Index { array, index } => write!(f, "{array}[{index}]"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = JavaPrinter::new();
        printer.print_statement(self);
        f.write_str(&printer.finish())
    }
}

impl fmt::Display for StatementBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = JavaPrinter::new();
        printer.print_block(self);
        f.write_str(&printer.finish())
    }
}
