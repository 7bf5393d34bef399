//! Compiler configuration.

use aidl_diagnostic::DiagnosticConfig;

/// How a batch of documents shares type registries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegistryMode {
    /// One namespace for the whole batch. Every document is declared
    /// before any is resolved, so documents may reference each other's
    /// types regardless of order.
    #[default]
    Shared,
    /// A fresh namespace per document. Documents see only built-ins and
    /// their own declarations, and are compiled in parallel.
    PerFile,
}

/// Options for one compiler run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompilerOptions {
    pub registry_mode: RegistryMode,
    pub diagnostics: DiagnosticConfig,
    /// Attach the namespace dump to each output.
    pub dump_types: bool,
}

impl CompilerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_registry_mode(mut self, registry_mode: RegistryMode) -> Self {
        self.registry_mode = registry_mode;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub fn with_dump_types(mut self, dump_types: bool) -> Self {
        self.dump_types = dump_types;
        self
    }
}
