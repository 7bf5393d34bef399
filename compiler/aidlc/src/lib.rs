//! AIDL Compiler Driver
//!
//! Takes already-parsed interface documents and produces per-method
//! marshalling code, or diagnostics explaining why it could not.
//!
//! # Architecture
//!
//! ```text
//! Document (parsed)
//!     │
//!     ▼
//! declare ──► Namespace (parcelables, interfaces)
//!     │
//!     ▼
//! resolve ──► ResolvedInterface (type ids)
//!     │
//!     ▼
//! check ──► legal methods only
//!     │
//!     ▼
//! generate ──► GeneratedMethod (proxy + stub blocks)
//! ```
//!
//! Every pass reports into a per-document `DiagnosticQueue` and keeps
//! going, so one run surfaces every error in a document.

use std::sync::Once;

mod compile;
pub mod document;
mod generate;
mod options;
pub mod passes;

pub use compile::{compile_batch, CompileOutput, Compiler};
pub use generate::{generate_method, GeneratedMethod};
pub use options::{CompilerOptions, RegistryMode};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=aidl_types=debug`
/// or `RUST_LOG=aidlc=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
