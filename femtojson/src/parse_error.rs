// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A malformed literal or malformed number syntax.
    InvalidValue,
    /// A well-formed root value was followed by extra non-whitespace content.
    RootNotSingular,
    /// A syntactically valid number overflows the f64 range.
    NumberTooBig,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => write!(f, "Expected a value"),
            ParseError::InvalidValue => write!(f, "Invalid literal or number"),
            ParseError::RootNotSingular => {
                write!(f, "Unexpected content after the root value")
            }
            ParseError::NumberTooBig => write!(f, "Number out of f64 range"),
        }
    }
}
