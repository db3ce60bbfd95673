use crate::Position;
use thiserror::Error;

/// An error produced when a lexer reports a problem with its input
///
/// Lexing errors are emitted as tokens by [Lexer::errorf](crate::Lexer::errorf), they're
/// converted into this type by [Lexer::tokenize](crate::Lexer::tokenize).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{lexer} - {position}: {message}")]
pub struct Error {
    /// The name of the lexer that produced the error
    pub lexer: String,
    /// The error's message
    pub message: String,
    /// The position in the input where the error was reported
    pub position: Position,
}

impl Error {
    /// Initializes an error with the given message
    pub fn new(lexer: impl Into<String>, message: impl Into<String>, position: Position) -> Self {
        Self {
            lexer: lexer.into(),
            message: message.into(),
            position,
        }
    }
}

/// The result type used by the [Lexer](crate::Lexer)
pub type Result<T> = std::result::Result<T, Error>;
