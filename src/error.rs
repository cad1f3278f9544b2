// error.rs - Error type for Unicode mapping operations.
//
// The pipeline reports failures through five C-style negative codes; this
// module pairs them with an idiomatic Rust error enum.

use std::fmt;

/// Memory could not be allocated.
pub const ERROR_NOMEM: i32 = -1;
/// The given string is too long to be processed.
pub const ERROR_OVERFLOW: i32 = -2;
/// The given string is not a legal UTF-8 string.
pub const ERROR_INVALIDUTF8: i32 = -3;
/// `REJECTNA` was set and an unassigned codepoint was found.
pub const ERROR_NOTASSIGNED: i32 = -4;
/// Invalid options have been used.
pub const ERROR_INVALIDOPTS: i32 = -5;

/// Error type for all mapping, decomposition and re-encoding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Memory allocation failure.
    NoMem,
    /// Result length exceeds the range of the size type.
    Overflow,
    /// The input is not well-formed UTF-8.
    InvalidUtf8,
    /// An unassigned codepoint was found while `REJECTNA` was active.
    NotAssigned,
    /// The option combination is not supported.
    InvalidOpts,
}

impl Error {
    /// Returns the C-style numeric error code.
    pub fn code(&self) -> i32 {
        match self {
            Error::NoMem => ERROR_NOMEM,
            Error::Overflow => ERROR_OVERFLOW,
            Error::InvalidUtf8 => ERROR_INVALIDUTF8,
            Error::NotAssigned => ERROR_NOTASSIGNED,
            Error::InvalidOpts => ERROR_INVALIDOPTS,
        }
    }

    /// Maps a numeric error code back to an `Error`, if it is one.
    pub fn from_code(code: i32) -> Option<Error> {
        match code {
            ERROR_NOMEM => Some(Error::NoMem),
            ERROR_OVERFLOW => Some(Error::Overflow),
            ERROR_INVALIDUTF8 => Some(Error::InvalidUtf8),
            ERROR_NOTASSIGNED => Some(Error::NotAssigned),
            ERROR_INVALIDOPTS => Some(Error::InvalidOpts),
            _ => None,
        }
    }
}

/// Returns a static message for the given error code.
pub fn errmsg(code: i32) -> &'static str {
    match code {
        ERROR_NOMEM => "Memory for processing UTF-8 data could not be allocated.",
        ERROR_OVERFLOW => "UTF-8 string is too long to be processed.",
        ERROR_INVALIDUTF8 => "Invalid UTF-8 string.",
        ERROR_NOTASSIGNED => "Unassigned Unicode code point found in UTF-8 string.",
        ERROR_INVALIDOPTS => "Invalid options for UTF-8 processing chosen.",
        _ => "An unknown error occurred while processing UTF-8 data.",
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(errmsg(self.code()))
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for err in [
            Error::NoMem,
            Error::Overflow,
            Error::InvalidUtf8,
            Error::NotAssigned,
            Error::InvalidOpts,
        ] {
            assert_eq!(Error::from_code(err.code()), Some(err));
        }
        assert_eq!(Error::from_code(0), None);
        assert_eq!(Error::from_code(-9), None);
    }

    #[test]
    fn display_uses_static_messages() {
        assert_eq!(Error::InvalidUtf8.to_string(), "Invalid UTF-8 string.");
        assert_eq!(
            errmsg(-42),
            "An unknown error occurred while processing UTF-8 data."
        );
    }

    #[test]
    fn error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(Error::Overflow);
        assert_eq!(err.to_string(), "UTF-8 string is too long to be processed.");
    }
}
