use aidl_diagnostic::DiagnosticQueue;
use aidl_types::Namespace;
use tracing::debug;

use crate::document::{Document, Item};

/// Register every user type a document declares.
///
/// A clash with an existing type is reported at the new declaration,
/// with a secondary label at the previous one when it has a site.
pub fn declare_document(names: &mut Namespace, document: &Document, queue: &mut DiagnosticQueue) {
    for item in &document.items {
        let (result, line) = match item {
            Item::Parcelable(parcelable) => (
                names.declare_parcelable(
                    &document.package,
                    &parcelable.name,
                    document.site(parcelable.line),
                ),
                parcelable.line,
            ),
            Item::Interface(interface) => (
                names.declare_interface(
                    &document.package,
                    &interface.name,
                    interface.oneway,
                    document.site(interface.line),
                ),
                interface.line,
            ),
        };

        match result {
            Ok(id) => debug!(file = %document.file, ?id, "declared"),
            Err(err) => {
                queue.add(err.to_diagnostic(document.site(line)));
            }
        }
    }
}
