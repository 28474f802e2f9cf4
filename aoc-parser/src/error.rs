//! Error types for the cursor parser

use thiserror::Error;

/// Error raised by a single parse operation on one line
///
/// Offsets are byte offsets into the line being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The character at `offset` differs from the expected literal character
    #[error("expected {expected:?} at offset {offset}, found {actual:?}")]
    UnexpectedCharacter {
        expected: char,
        actual: char,
        offset: usize,
    },

    /// A read was attempted at or past the end of the line
    #[error("unexpected end of line at offset {offset} (line length {len})")]
    OutOfBounds { offset: usize, len: usize },

    /// A digit token could not be converted into an integer
    #[error("malformed numeral {token:?} at offset {offset}")]
    MalformedNumeral { token: String, offset: usize },

    /// Characters remain where the line was expected to end
    #[error("unexpected trailing input {rest:?} at offset {offset}")]
    TrailingInput { offset: usize, rest: String },
}

impl ParseError {
    /// Offset the error was reported at
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { offset, .. }
            | ParseError::OutOfBounds { offset, .. }
            | ParseError::MalformedNumeral { offset, .. }
            | ParseError::TrailingInput { offset, .. } => *offset,
        }
    }

    /// Attach the 1-based number of the line this error occurred on
    pub fn at_line(self, line: usize) -> LineError {
        LineError { line, source: self }
    }
}

/// A [`ParseError`] tagged with the 1-based line number it occurred on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub source: ParseError,
}
