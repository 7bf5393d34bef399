//! Splitting textual type references.

use crate::LookupError;

/// A type reference after whitespace normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TypeRefText<'a> {
    /// `Foo` or `pkg.Foo`.
    Plain(&'a str),
    /// `Base<A,B>`.
    Generic { base: &'a str, args: Vec<&'a str> },
}

/// Remove every whitespace character: `Map< String , Foo >` and
/// `Map<String,Foo>` name the same type.
pub(crate) fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split a normalized reference into its base name and arguments.
///
/// Arguments may not themselves be generic.
pub(crate) fn split(text: &str) -> Result<TypeRefText<'_>, LookupError> {
    let Some(open) = text.find('<') else {
        if text.is_empty() || text.contains('>') || text.contains(',') {
            return Err(LookupError::Malformed(text.to_owned()));
        }
        return Ok(TypeRefText::Plain(text));
    };

    let base = &text[..open];
    let Some(inner) = text[open + 1..].strip_suffix('>') else {
        return Err(LookupError::Malformed(text.to_owned()));
    };
    if base.is_empty() || inner.is_empty() {
        return Err(LookupError::Malformed(text.to_owned()));
    }
    if inner.contains('<') || inner.contains('>') {
        return Err(LookupError::NestedGeneric(text.to_owned()));
    }

    let args: Vec<&str> = inner.split(',').collect();
    if args.iter().any(|arg| arg.is_empty()) {
        return Err(LookupError::Malformed(text.to_owned()));
    }
    Ok(TypeRefText::Generic { base, args })
}
