//! Diagnostic system for the AIDL compiler.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Declaration sites (where it went wrong, and where the conflicting
//!   earlier declaration lives)
//! - Suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{ambiguous_type, redefinition, unknown_type, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
