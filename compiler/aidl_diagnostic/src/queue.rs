//! Per-document error collection.
//!
//! A compilation keeps going after the first unresolved type so that one
//! run reports every problem; the queue is where those errors accumulate
//! until the driver decides to abort.

use crate::{Diagnostic, ErrorCode};

/// How a [`DiagnosticQueue`] filters what it is given.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further errors are dropped (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error identical to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep everything: no cap, no deduplication.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }
}

/// Diagnostics of one document, in the order they will be reported.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    dropped_errors: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Queue a diagnostic; `false` when the error limit or deduplication
    /// filtered it out.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();

        if is_error && self.config.error_limit > 0 && self.error_count >= self.config.error_limit {
            self.dropped_errors += 1;
            return false;
        }

        if self.config.deduplicate && self.diagnostics.contains(&diag) {
            return false;
        }

        if is_error {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Number of errors accepted so far.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, sorted by primary site.
    ///
    /// Diagnostics without a site sort first; the sort is stable, so
    /// diagnostics at the same site keep insertion order. A trailing
    /// E9002 note reports how many errors the limit swallowed.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by(|a, b| a.primary_site().cmp(&b.primary_site()));

        if self.dropped_errors > 0 {
            diagnostics.push(
                Diagnostic::note(ErrorCode::E9002).with_message(format!(
                    "aborting after {} errors ({} more not shown)",
                    self.error_count, self.dropped_errors
                )),
            );
        }

        self.error_count = 0;
        self.dropped_errors = 0;
        diagnostics
    }
}
