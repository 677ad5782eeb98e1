//! Error types for JSON parsing and serialization.

use thiserror::Error;

/// The input text does not conform to the JSON grammar.
///
/// Raised during lexing or parsing. Carries the byte offset where the
/// problem was detected and a message phrased as expectation versus actual.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("syntax error at byte {offset}: {message}")]
pub struct SyntaxError {
    /// Byte offset into the input where the error was detected.
    pub offset: usize,
    /// What the lexer or parser expected versus what it found.
    pub message: String,
}

impl SyntaxError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        SyntaxError {
            offset,
            message: message.into(),
        }
    }
}

/// A value in the tree has no JSON representation.
///
/// Raised during serialization. No partial output is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// NaN and infinities have no JSON number form.
    #[error("cannot encode non-finite float {0}")]
    NonFinite(f64),

    /// The tree nests deeper than the serializer's documented limit.
    #[error("nesting exceeds {0} levels")]
    TooDeep(usize),
}
