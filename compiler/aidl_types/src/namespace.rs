//! The type registry.
//!
//! A `Namespace` owns every descriptor of one compilation run in an
//! arena indexed by [`TypeId`], plus the generic templates that produce
//! parameterized descriptors on demand. There is no global instance:
//! the driver builds one per run (or per file) and threads it through
//! resolution and code generation.
//!
//! # Lookup
//!
//! - [`Namespace::find`]: exact `package` + `name`.
//! - [`Namespace::resolve`]: qualified name, then unique simple name,
//!   instantiating generics (`List<String>`) on first sight.
//! - [`Namespace::search`]: `resolve` with the error discarded.

use std::fmt::Write;
use std::ops::Index;

use aidl_ir::DeclSite;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::descriptor::qualify;
use crate::{
    bootstrap, Capabilities, GenericArgs, ListElement, LookupError, MarshalError, RegisterError,
    TypeDescriptor, TypeId, TypeKind, TypeVariant,
};

mod parse;

use parse::TypeRefText;

/// Simple name of ordered-sequence templates, in whatever package.
const LIST_NAME: &str = "List";
/// Qualified name of the key-value template.
const MAP_TEMPLATE: &str = "java.util.Map";

/// A recipe for parameterized descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericTemplate {
    package: String,
    name: String,
    qualified_name: String,
    arity: usize,
}

impl GenericTemplate {
    #[inline]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Number of type arguments an instantiation takes.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// Registry of descriptors and generic templates for one compilation.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    types: Vec<TypeDescriptor>,
    by_qualified: FxHashMap<String, TypeId>,
    /// Simple name to every non-generic type carrying it.
    by_simple: FxHashMap<String, SmallVec<[TypeId; 1]>>,
    templates: Vec<GenericTemplate>,
    templates_by_qualified: FxHashMap<String, usize>,
}

impl Namespace {
    /// An empty namespace, without built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// A namespace seeded with every built-in type and template.
    pub fn with_builtins() -> Self {
        let mut names = Self::new();
        bootstrap::register_builtin_types(&mut names);
        names
    }

    // === Registration ===

    /// Add a descriptor.
    ///
    /// Registering an identical descriptor again (same kind, same
    /// declaration site) returns the existing handle; any other clash on
    /// the qualified name is a redefinition.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<TypeId, RegisterError> {
        if let Some(&previous) = self.by_qualified.get(descriptor.qualified_name()) {
            let existing = &self[previous];
            if existing == &descriptor {
                trace!(name = descriptor.qualified_name(), "re-registered identical type");
                return Ok(previous);
            }
            return Err(RegisterError::Redefinition {
                qualified_name: descriptor.qualified_name().to_owned(),
                new_kind: descriptor.kind(),
                new_site: descriptor.decl_site().cloned(),
                previous,
                previous_kind: existing.kind(),
                previous_site: existing.decl_site().cloned(),
            });
        }

        debug!(
            name = descriptor.qualified_name(),
            kind = %descriptor.kind(),
            "registered type"
        );
        Ok(self.insert(descriptor))
    }

    /// Register a parcelable record declared at `site`.
    pub fn declare_parcelable(
        &mut self,
        package: &str,
        name: &str,
        site: DeclSite,
    ) -> Result<TypeId, RegisterError> {
        self.register(TypeDescriptor::parcelable(package, name, site))
    }

    /// Register an interface declared at `site`.
    pub fn declare_interface(
        &mut self,
        package: &str,
        name: &str,
        oneway: bool,
        site: DeclSite,
    ) -> Result<TypeId, RegisterError> {
        self.register(TypeDescriptor::interface(package, name, oneway, site))
    }

    /// Record a generic template.
    ///
    /// The same name with the same arity is accepted again; a different
    /// arity is rejected.
    pub fn register_generic_template(
        &mut self,
        package: &str,
        name: &str,
        arity: usize,
    ) -> Result<(), RegisterError> {
        let qualified_name = qualify(package, name);
        if let Some(&index) = self.templates_by_qualified.get(&qualified_name) {
            let existing = self.templates[index].arity;
            if existing == arity {
                return Ok(());
            }
            return Err(RegisterError::GenericArityConflict {
                qualified_name,
                existing,
                requested: arity,
            });
        }

        debug!(name = %qualified_name, arity, "registered generic template");
        self.templates_by_qualified
            .insert(qualified_name.clone(), self.templates.len());
        self.templates.push(GenericTemplate {
            package: package.to_owned(),
            name: name.to_owned(),
            qualified_name,
            arity,
        });
        Ok(())
    }

    fn insert(&mut self, descriptor: TypeDescriptor) -> TypeId {
        let raw = u32::try_from(self.types.len()).unwrap_or(u32::MAX);
        let id = TypeId::from_raw(raw);
        self.by_qualified
            .insert(descriptor.qualified_name().to_owned(), id);
        if descriptor.kind() != TypeKind::Generic {
            self.by_simple
                .entry(descriptor.name().to_owned())
                .or_default()
                .push(id);
        }
        self.types.push(descriptor);
        id
    }

    // === Access ===

    #[inline]
    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get(id.index())
    }

    /// A built-in descriptor, required by code generation.
    pub fn builtin(&self, id: TypeId) -> Result<&TypeDescriptor, MarshalError> {
        self.get(id).ok_or(MarshalError::MissingBuiltin(id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Every descriptor in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor)> {
        self.types.iter().enumerate().map(|(i, descriptor)| {
            let raw = u32::try_from(i).unwrap_or(u32::MAX);
            (TypeId::from_raw(raw), descriptor)
        })
    }

    /// Every generic template in registration order.
    pub fn templates(&self) -> impl Iterator<Item = &GenericTemplate> {
        self.templates.iter()
    }

    // === Lookup ===

    /// Exact lookup by package and simple name.
    pub fn find(&self, package: &str, name: &str) -> Option<TypeId> {
        self.find_qualified(&qualify(package, name))
    }

    /// Exact lookup by qualified name.
    pub fn find_qualified(&self, qualified_name: &str) -> Option<TypeId> {
        let found = self.by_qualified.get(qualified_name).copied();
        trace!(name = qualified_name, ?found, "find");
        found
    }

    /// Resolve a textual reference, or `None` if it is unknown or ambiguous.
    pub fn search(&mut self, name: &str) -> Option<TypeId> {
        self.resolve(name).ok()
    }

    /// Resolve a textual reference.
    ///
    /// Tries the text as a qualified name, then as a simple name that
    /// must be unique across packages. `Base<A,B>` resolves the template
    /// and each argument the same way and instantiates it.
    pub fn resolve(&mut self, name: &str) -> Result<TypeId, LookupError> {
        let text = parse::normalize(name);
        match parse::split(&text)? {
            TypeRefText::Plain(plain) => self.resolve_plain(plain),
            TypeRefText::Generic { base, args } => {
                let template = self.resolve_generic_template(base)?.clone();
                let args = args
                    .into_iter()
                    .map(|arg| self.resolve_plain(arg))
                    .collect::<Result<SmallVec<[TypeId; 2]>, _>>()?;
                self.instantiate_generic(&template, &args)
            }
        }
    }

    fn resolve_plain(&self, name: &str) -> Result<TypeId, LookupError> {
        if let Some(id) = self.find_qualified(name) {
            return Ok(id);
        }

        match self.by_simple.get(name).map(SmallVec::as_slice) {
            Some(&[id]) => Ok(id),
            Some(ids) if !ids.is_empty() => {
                let mut candidates: Vec<String> = ids
                    .iter()
                    .map(|&id| self[id].qualified_name().to_owned())
                    .collect();
                candidates.sort();
                trace!(name, ?candidates, "ambiguous simple name");
                Err(LookupError::Ambiguous {
                    name: name.to_owned(),
                    candidates,
                })
            }
            _ => Err(LookupError::Unknown(name.to_owned())),
        }
    }

    /// Find a generic template by qualified, then unique simple name.
    pub fn search_generic_template(&self, name: &str) -> Option<&GenericTemplate> {
        self.resolve_generic_template(name).ok()
    }

    /// [`Namespace::search_generic_template`] with the failure reason.
    pub fn resolve_generic_template(&self, name: &str) -> Result<&GenericTemplate, LookupError> {
        if let Some(&index) = self.templates_by_qualified.get(name) {
            return Ok(&self.templates[index]);
        }

        let matches: Vec<&GenericTemplate> =
            self.templates.iter().filter(|t| t.name == name).collect();
        match matches.as_slice() {
            [template] => Ok(template),
            [] => Err(LookupError::Unknown(name.to_owned())),
            many => Err(LookupError::Ambiguous {
                name: name.to_owned(),
                candidates: many.iter().map(|t| t.qualified_name.clone()).collect(),
            }),
        }
    }

    /// Produce (or retrieve) the descriptor for `template<args..>`.
    ///
    /// Arguments keep their order; the same arguments always yield the
    /// same handle.
    pub fn instantiate_generic(
        &mut self,
        template: &GenericTemplate,
        args: &[TypeId],
    ) -> Result<TypeId, LookupError> {
        if args.len() != template.arity {
            return Err(LookupError::ArityMismatch {
                name: template.qualified_name.clone(),
                expected: template.arity,
                found: args.len(),
            });
        }

        let mut rendered = String::from("<");
        for (i, &arg) in args.iter().enumerate() {
            let Some(descriptor) = self.get(arg) else {
                return Err(LookupError::Unknown(format!("{arg:?}")));
            };
            if descriptor.kind() == TypeKind::Generic {
                return Err(LookupError::NestedGeneric(
                    descriptor.qualified_name().to_owned(),
                ));
            }
            if i > 0 {
                rendered.push(',');
            }
            rendered.push_str(descriptor.qualified_name());
        }
        rendered.push('>');

        let qualified_name = format!("{}{rendered}", template.qualified_name);
        if let Some(id) = self.find_qualified(&qualified_name) {
            return Ok(id);
        }

        let descriptor = self.build_generic(template, args, rendered);
        debug!(name = %qualified_name, "instantiated generic");
        Ok(self.insert(descriptor))
    }

    fn build_generic(
        &self,
        template: &GenericTemplate,
        args: &[TypeId],
        rendered: String,
    ) -> TypeDescriptor {
        let is_list = template.name == LIST_NAME && template.arity == 1;
        let instantiable_base = match template.qualified_name.as_str() {
            _ if is_list => "java.util.ArrayList",
            MAP_TEMPLATE => "java.util.HashMap",
            other => other,
        };
        let generic = GenericArgs {
            args: SmallVec::from_slice(args),
            instantiable: format!("{instantiable_base}{rendered}"),
            rendered,
        };

        if is_list {
            let element = match self.get(args[0]).map(TypeDescriptor::variant) {
                Some(TypeVariant::String) => ListElement::Strings,
                Some(TypeVariant::Binder(crate::BinderKind::Handle)) => ListElement::Binders,
                Some(TypeVariant::UserData) => ListElement::Typed {
                    creator: format!("{}.CREATOR", self[args[0]].qualified_name()),
                },
                _ => ListElement::Untyped,
            };
            return TypeDescriptor::generic(
                &template.package,
                &template.name,
                Capabilities::WRITE_AND_OUT,
                TypeVariant::GenericList { generic, element },
            );
        }

        // Element-wise delegation covers single-element and key-value
        // containers only.
        let caps = if matches!(template.arity, 1 | 2) {
            Capabilities::WRITE_AND_OUT
        } else {
            Capabilities::empty()
        };
        TypeDescriptor::generic(
            &template.package,
            &template.name,
            caps,
            TypeVariant::Generic(generic),
        )
    }

    // === Debugging ===

    /// One line per descriptor, in registration order.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for descriptor in &self.types {
            let _ = writeln!(
                out,
                "type: package={} name={} qualifiedName={}",
                descriptor.package(),
                descriptor.name(),
                descriptor.qualified_name()
            );
        }
        out
    }
}

impl Index<TypeId> for Namespace {
    type Output = TypeDescriptor;

    #[inline]
    fn index(&self, id: TypeId) -> &TypeDescriptor {
        &self.types[id.index()]
    }
}
