use std::fmt;

use aidl_ir::DeclSite;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    /// Context that does not count toward the error limit.
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A message attached to a declaration site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub site: DeclSite,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(site: DeclSite, message: impl Into<String>) -> Self {
        Label {
            site,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context, e.g. an earlier declaration).
    pub fn secondary(site: DeclSite, message: impl Into<String>) -> Self {
        Label {
            site,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A compiler diagnostic.
///
/// Built-in types have no declaration site, so a diagnostic about one may
/// carry no labels at all; user-facing errors always carry a primary label
/// at the referencing declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    /// One-line summary.
    pub message: String,
    /// Declaration sites involved, primary first by convention.
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// How to fix it, rendered as `help:` lines.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Error)
    }

    pub fn note(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Note)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the site the diagnostic is about.
    pub fn with_label(mut self, site: DeclSite, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(site, message));
        self
    }

    /// Attach a related site, such as an earlier declaration.
    pub fn with_secondary_label(mut self, site: DeclSite, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(site, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Site of the first primary label.
    pub fn primary_site(&self) -> Option<&DeclSite> {
        self.labels.iter().find(|l| l.is_primary).map(|l| &l.site)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let arrow = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {arrow} {}: {}", label.site, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}

// Constructors shared by the resolution and legality passes.

/// Create an "unknown type" diagnostic at the referencing site.
pub fn unknown_type(site: DeclSite, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("unknown type `{name}`"))
        .with_label(site, "referenced here")
        .with_suggestion("declare or import the type before using it")
}

/// Create an "ambiguous type" diagnostic listing every candidate.
pub fn ambiguous_type(site: DeclSite, name: &str, candidates: &[String]) -> Diagnostic {
    let mut diag = Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("type name `{name}` is ambiguous"))
        .with_label(site, "referenced here");
    for candidate in candidates {
        diag = diag.with_note(format!("could be `{candidate}`"));
    }
    diag.with_suggestion("use the fully qualified name")
}

/// Create a redefinition diagnostic pointing at both declarations.
pub fn redefinition(
    site: DeclSite,
    qualified_name: &str,
    new_kind: &str,
    previous: Option<DeclSite>,
    previous_kind: &str,
) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message(format!(
            "attempt to redefine {qualified_name} as {new_kind}"
        ))
        .with_label(site, format!("redefined here as {new_kind}"));
    match previous {
        Some(previous) => {
            diag.with_secondary_label(previous, format!("previously defined here as {previous_kind}"))
        }
        None => diag.with_note(format!("{qualified_name} is {previous_kind} type")),
    }
}

#[cfg(test)]
mod tests;
