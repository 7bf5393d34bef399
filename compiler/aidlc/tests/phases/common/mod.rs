//! Shared test utilities for phase tests.

use aidl_diagnostic::{Diagnostic, ErrorCode};
use aidlc::document::Document;
use aidlc::{CompileOutput, Compiler, CompilerOptions};

/// Options that never drop or merge diagnostics.
pub fn options() -> CompilerOptions {
    CompilerOptions::new().with_diagnostics(aidl_diagnostic::DiagnosticConfig::unlimited())
}

/// Compile one document against a fresh namespace, keeping the compiler
/// around for namespace inspection.
pub fn compile(document: &Document) -> (Compiler, CompileOutput) {
    let mut compiler = Compiler::new(options());
    let output = compiler.compile(document);
    (compiler, output)
}

/// Error codes of an output, in report order.
pub fn codes(output: &CompileOutput) -> Vec<ErrorCode> {
    output.diagnostics.iter().map(|d| d.code).collect()
}

/// The only diagnostic of an output.
pub fn only_diagnostic(output: &CompileOutput) -> &Diagnostic {
    assert_eq!(
        output.diagnostics.len(),
        1,
        "expected one diagnostic, got {:#?}",
        output.diagnostics
    );
    &output.diagnostics[0]
}

/// `file:line` of every label of a diagnostic, primary first.
pub fn label_sites(diag: &Diagnostic) -> Vec<String> {
    let mut labels: Vec<_> = diag.labels.iter().collect();
    labels.sort_by_key(|l| !l.is_primary);
    labels.iter().map(|l| l.site.to_string()).collect()
}
