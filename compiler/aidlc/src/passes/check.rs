//! Marshalling legality.
//!
//! Every rule here guards a descriptor operation: a method that passes
//! the check can be generated without a contract violation.

use aidl_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use aidl_ir::DeclSite;
use aidl_types::{Namespace, TypeDescriptor};
use rustc_hash::FxHashSet;

use super::{ResolvedInterface, ResolvedMethod, ResolvedType};
use crate::document::Document;

fn error(code: ErrorCode, site: DeclSite, message: String, label: &str) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(message)
        .with_label(site, label)
}

/// Report a type that may not appear in a signature at all.
fn check_marshallable(
    names: &Namespace,
    ty: ResolvedType,
    site: &DeclSite,
    queue: &mut DiagnosticQueue,
) -> bool {
    let descriptor = &names[ty.id];
    let mut ok = true;

    if !descriptor.can_write_to_parcel() {
        queue.add(error(
            ErrorCode::E2001,
            site.clone(),
            format!("{} cannot be marshalled", descriptor.qualified_name()),
            "used here",
        ));
        ok = false;
    } else if ty.is_array && !descriptor.can_be_array() {
        queue.add(error(
            ErrorCode::E2002,
            site.clone(),
            format!("{} cannot be an array", descriptor.qualified_name()),
            "array declared here",
        ));
        ok = false;
    }

    for &arg in descriptor.generic_argument_types() {
        let arg = &names[arg];
        if !arg.can_write_to_parcel() {
            queue.add(error(
                ErrorCode::E2001,
                site.clone(),
                format!(
                    "{} cannot be marshalled as an argument of {}",
                    arg.qualified_name(),
                    descriptor.qualified_name()
                ),
                "used here",
            ));
            ok = false;
        }
    }
    ok
}

/// Whether the generator can fill an existing value of this type.
fn can_read_into(descriptor: &TypeDescriptor, ty: ResolvedType) -> bool {
    if ty.is_array {
        descriptor.can_be_array()
    } else {
        descriptor.can_be_out_parameter()
    }
}

fn check_method(
    names: &Namespace,
    document: &Document,
    method: &ResolvedMethod,
    queue: &mut DiagnosticQueue,
) -> bool {
    let site = document.site(method.line);
    let mut ok = true;

    if !method.return_type.is_void() {
        ok &= check_marshallable(names, method.return_type, &site, queue);
        if method.oneway {
            queue.add(error(
                ErrorCode::E2004,
                site.clone(),
                format!("oneway method {} cannot return a value", method.name),
                "declared here",
            ));
            ok = false;
        }
    }

    let mut seen = FxHashSet::default();
    for param in &method.params {
        let site = document.site(param.line);
        let descriptor = &names[param.ty.id];

        if !seen.insert(param.name.as_str()) {
            queue.add(error(
                ErrorCode::E2005,
                site.clone(),
                format!("parameter {} is declared more than once", param.name),
                "redeclared here",
            ));
            ok = false;
        }

        if param.ty.is_void() {
            queue.add(error(
                ErrorCode::E2001,
                site,
                format!("parameter {} cannot be void", param.name),
                "declared here",
            ));
            ok = false;
            continue;
        }
        if !check_marshallable(names, param.ty, &site, queue) {
            ok = false;
            continue;
        }

        if param.direction.is_out() {
            if method.oneway {
                queue.add(error(
                    ErrorCode::E2004,
                    site.clone(),
                    format!(
                        "oneway method {} cannot have {} parameter {}",
                        method.name,
                        param.direction.as_str(),
                        param.name
                    ),
                    "declared here",
                ));
                ok = false;
            }
            if !can_read_into(descriptor, param.ty) {
                queue.add(
                    error(
                        ErrorCode::E2003,
                        site,
                        format!(
                            "{} parameter {} cannot be {}",
                            descriptor.qualified_name(),
                            param.name,
                            param.direction.as_str()
                        ),
                        "declared here",
                    )
                    .with_note(format!(
                        "{} is {} type",
                        descriptor.qualified_name(),
                        descriptor.human_readable_kind()
                    )),
                );
                ok = false;
            }
        }
    }
    ok
}

/// Drop every method of `interface` that cannot be generated, reporting why.
pub fn check_interface(
    names: &Namespace,
    document: &Document,
    interface: &mut ResolvedInterface,
    queue: &mut DiagnosticQueue,
) {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    interface.methods.retain(|method| {
        let mut ok = check_method(names, document, method, queue);
        if !seen.insert(method.name.clone()) {
            queue.add(error(
                ErrorCode::E2005,
                document.site(method.line),
                format!("method {} is declared more than once", method.name),
                "redeclared here",
            ));
            ok = false;
        }
        ok
    });
}
