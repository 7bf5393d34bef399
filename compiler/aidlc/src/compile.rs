//! Compilation driver.
//!
//! A [`Compiler`] owns one [`Namespace`] and runs the passes over the
//! documents handed to it. Generation only runs for a document whose
//! earlier passes reported no errors.

use aidl_diagnostic::{Diagnostic, DiagnosticQueue};
use aidl_types::Namespace;
use rayon::prelude::*;
use tracing::debug;

use crate::document::Document;
use crate::generate::{generate_method, GeneratedMethod};
use crate::options::{CompilerOptions, RegistryMode};
use crate::passes::{check_interface, declare_document, resolve_document};

/// Result of compiling one document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompileOutput {
    pub file: String,
    pub methods: Vec<GeneratedMethod>,
    pub diagnostics: Vec<Diagnostic>,
    /// Namespace dump taken after this document, when requested.
    pub type_dump: Option<String>,
}

impl CompileOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Every generated method, in declaration order.
    pub fn render(&self) -> String {
        self.methods.iter().map(GeneratedMethod::render).collect()
    }
}

/// Runs the passes against one owned namespace.
pub struct Compiler {
    options: CompilerOptions,
    names: Namespace,
}

impl Compiler {
    /// A compiler with a freshly bootstrapped namespace.
    pub fn new(options: CompilerOptions) -> Self {
        Compiler {
            options,
            names: Namespace::with_builtins(),
        }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn namespace(&self) -> &Namespace {
        &self.names
    }

    /// Declare and then finish a single document.
    pub fn compile(&mut self, document: &Document) -> CompileOutput {
        let queue = self.declare(document);
        self.finish(document, queue)
    }

    /// Register the document's types, returning the queue that holds
    /// any redefinition errors.
    pub fn declare(&mut self, document: &Document) -> DiagnosticQueue {
        let mut queue = DiagnosticQueue::with_config(self.options.diagnostics.clone());
        declare_document(&mut self.names, document, &mut queue);
        queue
    }

    /// Resolve, check and generate a document declared earlier.
    pub fn finish(&mut self, document: &Document, mut queue: DiagnosticQueue) -> CompileOutput {
        let mut interfaces = resolve_document(&mut self.names, document, &mut queue);
        for interface in &mut interfaces {
            check_interface(&self.names, document, interface, &mut queue);
        }

        let mut methods = Vec::new();
        if !queue.has_errors() {
            for interface in &interfaces {
                for method in &interface.methods {
                    match generate_method(&self.names, interface, method) {
                        Ok(generated) => methods.push(generated),
                        Err(err) => {
                            queue.add(err.to_diagnostic(document.site(method.line)));
                        }
                    }
                }
            }
        }

        let diagnostics = queue.flush();
        debug!(
            file = %document.file,
            methods = methods.len(),
            diagnostics = diagnostics.len(),
            "compiled"
        );
        CompileOutput {
            file: document.file.clone(),
            methods,
            diagnostics,
            type_dump: self.options.dump_types.then(|| self.names.dump()),
        }
    }
}

/// Compile a batch of documents, one output per document in input order.
pub fn compile_batch(options: &CompilerOptions, documents: &[Document]) -> Vec<CompileOutput> {
    match options.registry_mode {
        RegistryMode::Shared => {
            let mut compiler = Compiler::new(options.clone());
            let queues: Vec<DiagnosticQueue> =
                documents.iter().map(|doc| compiler.declare(doc)).collect();
            documents
                .iter()
                .zip(queues)
                .map(|(doc, queue)| compiler.finish(doc, queue))
                .collect()
        }
        RegistryMode::PerFile => documents
            .par_iter()
            .map(|doc| Compiler::new(options.clone()).compile(doc))
            .collect(),
    }
}

#[cfg(test)]
mod tests;
