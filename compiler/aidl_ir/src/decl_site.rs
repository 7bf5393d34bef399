//! Source locations for declarations.
//!
//! The interface parser hands every user-declared type and method a
//! `DeclSite` (file plus 1-based line). Built-in types have no site, so
//! APIs store `Option<DeclSite>` and expose the legacy accessors
//! (`""` / `-1`) through [`DeclSite::file_of`] and [`DeclSite::line_of`].

use std::fmt;

/// Where something was first declared in interface source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclSite {
    /// Path of the declaring file, as given to the compiler.
    pub file: String,
    /// 1-based line of the declaration.
    pub line: u32,
}

impl DeclSite {
    /// Line reported for types without a declaration.
    pub const NO_LINE: i32 = -1;

    /// Create a declaration site.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        DeclSite {
            file: file.into(),
            line,
        }
    }

    /// File of an optional site, empty for built-ins.
    #[inline]
    pub fn file_of(site: Option<&DeclSite>) -> &str {
        site.map_or("", |s| s.file.as_str())
    }

    /// Line of an optional site, [`DeclSite::NO_LINE`] for built-ins.
    #[inline]
    pub fn line_of(site: Option<&DeclSite>) -> i32 {
        site.map_or(Self::NO_LINE, |s| i32::try_from(s.line).unwrap_or(i32::MAX))
    }
}

impl fmt::Display for DeclSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
