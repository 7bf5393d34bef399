//! Parsed interface documents.
//!
//! The parser is not part of this crate; it produces these values, one
//! per source file. Type references stay textual until resolution.

use aidl_ir::DeclSite;

/// Parameter passing direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    In,
    Out,
    InOut,
}

impl Direction {
    /// Whether the callee's value travels back to the caller.
    #[inline]
    pub fn is_out(self) -> bool {
        matches!(self, Direction::Out | Direction::InOut)
    }

    /// Whether the caller's value travels to the callee.
    #[inline]
    pub fn is_in(self) -> bool {
        matches!(self, Direction::In | Direction::InOut)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "inout",
        }
    }
}

/// A textual type reference, e.g. `List<String>` or `int[]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// Name without the array marker.
    pub name: String,
    pub is_array: bool,
    pub line: u32,
}

impl TypeRef {
    /// Parse a trailing `[]` into the array marker.
    pub fn new(text: &str, line: u32) -> Self {
        let trimmed = text.trim();
        match trimmed.strip_suffix("[]") {
            Some(element) => TypeRef {
                name: element.trim_end().to_owned(),
                is_array: true,
                line,
            },
            None => TypeRef {
                name: trimmed.to_owned(),
                is_array: false,
                line,
            },
        }
    }

    /// `void` without an array marker.
    pub fn is_void(&self) -> bool {
        !self.is_array && self.name == "void"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamDecl {
    pub direction: Direction,
    pub ty: TypeRef,
    pub name: String,
    pub line: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodDecl {
    pub name: String,
    pub line: u32,
    pub oneway: bool,
    pub return_type: TypeRef,
    pub params: Vec<ParamDecl>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, return_type: &str, line: u32) -> Self {
        MethodDecl {
            name: name.into(),
            line,
            oneway: false,
            return_type: TypeRef::new(return_type, line),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }

    #[must_use]
    pub fn param(mut self, direction: Direction, ty: &str, name: impl Into<String>) -> Self {
        self.params.push(ParamDecl {
            direction,
            ty: TypeRef::new(ty, self.line),
            name: name.into(),
            line: self.line,
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParcelableDecl {
    pub name: String,
    pub line: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceDecl {
    pub name: String,
    pub line: u32,
    /// Every method is fire-and-forget.
    pub oneway: bool,
    pub methods: Vec<MethodDecl>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<String>, line: u32) -> Self {
        InterfaceDecl {
            name: name.into(),
            line,
            oneway: false,
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }
}

/// A top-level declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    Parcelable(ParcelableDecl),
    Interface(InterfaceDecl),
}

/// One parsed source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Document {
    pub package: String,
    pub file: String,
    pub items: Vec<Item>,
}

impl Document {
    pub fn new(package: impl Into<String>, file: impl Into<String>) -> Self {
        Document {
            package: package.into(),
            file: file.into(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn parcelable(mut self, name: impl Into<String>, line: u32) -> Self {
        self.items.push(Item::Parcelable(ParcelableDecl {
            name: name.into(),
            line,
        }));
        self
    }

    #[must_use]
    pub fn interface(mut self, interface: InterfaceDecl) -> Self {
        self.items.push(Item::Interface(interface));
        self
    }

    /// Site of a line in this document.
    pub fn site(&self, line: u32) -> DeclSite {
        DeclSite::new(self.file.clone(), line)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Interface(interface) => Some(interface),
            Item::Parcelable(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_array_marker() {
        let array = TypeRef::new("pkg.Foo []", 4);
        assert_eq!(array.name, "pkg.Foo");
        assert!(array.is_array);
        assert!(!array.is_void());

        assert!(TypeRef::new("void", 1).is_void());
        assert!(!TypeRef::new("List<String>", 1).is_array);
    }

    #[test]
    fn direction_flow() {
        assert!(Direction::In.is_in() && !Direction::In.is_out());
        assert!(!Direction::Out.is_in() && Direction::Out.is_out());
        assert!(Direction::InOut.is_in() && Direction::InOut.is_out());
        assert_eq!(Direction::InOut.as_str(), "inout");
    }
}
