//! Registry and marshalling errors.
//!
//! Lookups and registrations return these as `Result`s; the driver turns
//! the user-facing ones into [`Diagnostic`]s at the referencing site.

use std::fmt;

use aidl_diagnostic::{ambiguous_type, redefinition, unknown_type, Diagnostic, ErrorCode};
use aidl_ir::DeclSite;
use thiserror::Error;

use crate::{TypeId, TypeKind};

/// Failure to add a type or template to a namespace.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A different type already owns the qualified name.
    #[error("attempt to redefine {qualified_name} as {new_kind}")]
    Redefinition {
        qualified_name: String,
        new_kind: TypeKind,
        new_site: Option<DeclSite>,
        previous: TypeId,
        previous_kind: TypeKind,
        previous_site: Option<DeclSite>,
    },
    /// A template with the same name was registered with another arity.
    #[error("generic {qualified_name} already declared with {existing} type parameters, not {requested}")]
    GenericArityConflict {
        qualified_name: String,
        existing: usize,
        requested: usize,
    },
}

impl RegisterError {
    /// Convert to a diagnostic at the new declaration's site.
    pub fn to_diagnostic(&self, site: DeclSite) -> Diagnostic {
        match self {
            RegisterError::Redefinition {
                qualified_name,
                new_kind,
                new_site,
                previous_kind,
                previous_site,
                ..
            } => redefinition(
                new_site.clone().unwrap_or(site),
                qualified_name,
                new_kind.human_readable(),
                previous_site.clone(),
                previous_kind.human_readable(),
            ),
            RegisterError::GenericArityConflict { .. } => Diagnostic::error(ErrorCode::E1004)
                .with_message(self.to_string())
                .with_label(site, "declared here"),
        }
    }
}

/// Failure to resolve a textual type reference.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown type `{0}`")]
    Unknown(String),
    /// More than one package declares the simple name.
    #[error("type name `{name}` is ambiguous")]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("`{name}` expects {expected} type arguments, found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("`{0}`: generic types cannot be used as type arguments")]
    NestedGeneric(String),
    #[error("`{0}` is not a valid type name")]
    Malformed(String),
}

impl LookupError {
    /// Convert to a diagnostic at the referencing site.
    pub fn to_diagnostic(&self, site: DeclSite) -> Diagnostic {
        match self {
            LookupError::Unknown(name) => unknown_type(site, name),
            LookupError::Ambiguous { name, candidates } => ambiguous_type(site, name, candidates),
            LookupError::ArityMismatch { .. } => Diagnostic::error(ErrorCode::E1004)
                .with_message(self.to_string())
                .with_label(site, "referenced here"),
            LookupError::NestedGeneric(_) | LookupError::Malformed(_) => {
                Diagnostic::error(ErrorCode::E1001)
                    .with_message(self.to_string())
                    .with_label(site, "referenced here")
            }
        }
    }
}

/// The descriptor operation a marshalling error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarshalOp {
    WriteToParcel,
    CreateFromParcel,
    ReadFromParcel,
    WriteArrayToParcel,
    CreateArrayFromParcel,
    ReadArrayFromParcel,
}

impl MarshalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            MarshalOp::WriteToParcel => "write_to_parcel",
            MarshalOp::CreateFromParcel => "create_from_parcel",
            MarshalOp::ReadFromParcel => "read_from_parcel",
            MarshalOp::WriteArrayToParcel => "write_array_to_parcel",
            MarshalOp::CreateArrayFromParcel => "create_array_from_parcel",
            MarshalOp::ReadArrayFromParcel => "read_array_from_parcel",
        }
    }

    #[inline]
    pub fn is_array(self) -> bool {
        matches!(
            self,
            MarshalOp::WriteArrayToParcel
                | MarshalOp::CreateArrayFromParcel
                | MarshalOp::ReadArrayFromParcel
        )
    }
}

impl fmt::Display for MarshalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A descriptor operation invoked outside its contract.
///
/// The method generator checks legality before calling in, so these
/// indicate a generator bug rather than bad interface source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error("{op} is not supported for {qualified_name}")]
    Unsupported {
        qualified_name: String,
        op: MarshalOp,
    },
    #[error("{0} cannot be an out parameter")]
    NotOutParameter(String),
    #[error("built-in {0:?} is missing from the namespace")]
    MissingBuiltin(TypeId),
}

impl MarshalError {
    pub(crate) fn unsupported(qualified_name: &str, op: MarshalOp) -> Self {
        MarshalError::Unsupported {
            qualified_name: qualified_name.to_owned(),
            op,
        }
    }

    /// Internal compiler error attributed to the method being generated.
    pub fn to_diagnostic(&self, site: DeclSite) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001)
            .with_message(format!("internal error: {self}"))
            .with_label(site, "while generating this method")
    }
}
