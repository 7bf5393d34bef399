//! Shared representations for the AIDL compiler.
//!
//! - [`DeclSite`]: where a type or method was declared, for diagnostics
//! - [`ast`]: the statement tree marshalling code is emitted into
//! - [`printer`]: Java rendering of that tree
//! - [`visitor`]: read-only traversal, used by structural checks

pub mod ast;
mod decl_site;
pub mod printer;
pub mod visitor;

pub use ast::{CompareOp, Expression, Statement, StatementBlock, Variable};
pub use decl_site::DeclSite;
pub use printer::JavaPrinter;
