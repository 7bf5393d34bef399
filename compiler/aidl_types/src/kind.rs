use std::fmt;

/// Classification of a descriptor.
///
/// Consumed by the method generator and diagnostics (out-parameter rules,
/// redefinition messages). Marshalling dispatch never looks at it; that
/// goes through [`TypeVariant`](crate::TypeVariant).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Registered by bootstrap.
    BuiltIn,
    /// A parcelable record declared in interface source.
    UserData,
    /// A remote-callable interface declared in interface source.
    Interface,
    /// An instantiation of a generic template.
    Generic,
}

impl TypeKind {
    /// Article-prefixed description used in diagnostics.
    pub fn human_readable(self) -> &'static str {
        match self {
            TypeKind::BuiltIn => "a built in",
            TypeKind::UserData => "a parcelable",
            TypeKind::Interface => "an interface",
            TypeKind::Generic => "a generic",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.human_readable())
    }
}
