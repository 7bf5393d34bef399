use aidl_diagnostic::DiagnosticQueue;
use aidl_types::{Namespace, TypeId, TypeKind};
use tracing::trace;

use crate::document::{Direction, Document, InterfaceDecl, MethodDecl, TypeRef};

/// A type reference bound to a descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedType {
    pub id: TypeId,
    pub is_array: bool,
}

impl ResolvedType {
    #[inline]
    pub fn is_void(self) -> bool {
        self.id == TypeId::VOID && !self.is_array
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedParam {
    pub name: String,
    pub direction: Direction,
    pub ty: ResolvedType,
    pub line: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedMethod {
    pub name: String,
    pub line: u32,
    /// Declared oneway, or inherited from a oneway interface.
    pub oneway: bool,
    pub return_type: ResolvedType,
    pub params: Vec<ResolvedParam>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedInterface {
    pub id: TypeId,
    pub line: u32,
    pub methods: Vec<ResolvedMethod>,
}

/// Resolve the methods of every interface a document declares.
///
/// A method with any unresolvable type is reported and dropped; the
/// rest of the interface is still resolved.
pub fn resolve_document(
    names: &mut Namespace,
    document: &Document,
    queue: &mut DiagnosticQueue,
) -> Vec<ResolvedInterface> {
    let mut resolved = Vec::new();
    for interface in document.interfaces() {
        // A failed declaration was already reported.
        let Some(id) = names.find(&document.package, &interface.name) else {
            continue;
        };
        let site = document.site(interface.line);
        if names[id].kind() != TypeKind::Interface || names[id].decl_site() != Some(&site) {
            continue;
        }

        let methods = interface
            .methods
            .iter()
            .filter_map(|method| resolve_method(names, document, interface, method, queue))
            .collect();
        resolved.push(ResolvedInterface {
            id,
            line: interface.line,
            methods,
        });
    }
    resolved
}

fn resolve_method(
    names: &mut Namespace,
    document: &Document,
    interface: &InterfaceDecl,
    method: &MethodDecl,
    queue: &mut DiagnosticQueue,
) -> Option<ResolvedMethod> {
    let return_type = resolve_type(names, document, &method.return_type, queue);
    let params: Vec<Option<ResolvedParam>> = method
        .params
        .iter()
        .map(|param| {
            resolve_type(names, document, &param.ty, queue).map(|ty| ResolvedParam {
                name: param.name.clone(),
                direction: param.direction,
                ty,
                line: param.line,
            })
        })
        .collect();

    // Every reference is resolved first so that all failures are reported.
    let return_type = return_type?;
    let params = params.into_iter().collect::<Option<Vec<_>>>()?;
    Some(ResolvedMethod {
        name: method.name.clone(),
        line: method.line,
        oneway: method.oneway || interface.oneway,
        return_type,
        params,
    })
}

fn resolve_type(
    names: &mut Namespace,
    document: &Document,
    ty: &TypeRef,
    queue: &mut DiagnosticQueue,
) -> Option<ResolvedType> {
    match names.resolve(&ty.name) {
        Ok(id) => {
            trace!(name = %ty.name, ?id, "resolved");
            Some(ResolvedType {
                id,
                is_array: ty.is_array,
            })
        }
        Err(err) => {
            queue.add(err.to_diagnostic(document.site(ty.line)));
            None
        }
    }
}
