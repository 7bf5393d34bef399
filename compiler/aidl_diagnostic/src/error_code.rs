use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Name resolution errors
/// - E2xxx: Marshalling legality errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Resolution Errors (E1xxx)
    /// Unknown type
    E1001,
    /// Ambiguous simple type name
    E1002,
    /// Type redefinition
    E1003,
    /// Generic arity conflict or wrong number of type arguments
    E1004,

    // Marshalling Errors (E2xxx)
    /// Type cannot be marshalled
    E2001,
    /// Type cannot be an array
    E2002,
    /// Type cannot be an out parameter
    E2003,
    /// Oneway method returns a value or has out parameters
    E2004,
    /// Duplicate method or parameter name
    E2005,

    // Internal Errors (E9xxx)
    /// Internal compiler error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line description, shown by `--explain`-style tooling.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unknown type",
            ErrorCode::E1002 => "ambiguous type name",
            ErrorCode::E1003 => "type redefinition",
            ErrorCode::E1004 => "wrong number of type arguments",
            ErrorCode::E2001 => "type cannot be marshalled",
            ErrorCode::E2002 => "type cannot be an array",
            ErrorCode::E2003 => "type cannot be an out parameter",
            ErrorCode::E2004 => "invalid oneway method",
            ErrorCode::E2005 => "duplicate name",
            ErrorCode::E9001 => "internal compiler error",
            ErrorCode::E9002 => "too many errors",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
