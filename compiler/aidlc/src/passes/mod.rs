//! Compilation passes over one document.
//!
//! 1. [`declare_document`]: register parcelables and interfaces
//! 2. [`resolve_document`]: resolve every type reference
//! 3. [`check_interface`]: marshalling legality
//!
//! Each pass reports into a [`DiagnosticQueue`](aidl_diagnostic::DiagnosticQueue)
//! and keeps going; only what survives a pass is handed to the next.

mod check;
mod declare;
mod resolve;

pub use check::check_interface;
pub use declare::declare_document;
pub use resolve::{
    resolve_document, ResolvedInterface, ResolvedMethod, ResolvedParam, ResolvedType,
};
