//! Error types for gate-expression parsing.

use thiserror::Error;

/// Errors that can occur while parsing gate-expression text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at position {position}: {message}")]
    LexerError {
        /// Byte offset of the invalid input.
        position: usize,
        /// What the lexer choked on.
        message: String,
    },

    /// Unexpected token.
    #[error("Unexpected token at position {position}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Byte offset of the token.
        position: usize,
        /// What the parser wanted here.
        expected: String,
        /// What it got instead.
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Unknown gate name.
    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    /// Wrong number of qubit arguments.
    #[error("Gate '{gate}' expects {expected} qubit arguments, got {got}")]
    WrongArgCount {
        /// Name of the gate.
        gate: String,
        /// Expected number of arguments.
        expected: usize,
        /// Actual number of arguments provided.
        got: usize,
    },

    /// The same wire appears twice in one gate.
    #[error("Duplicate qubit {qubit} in gate '{gate}'")]
    DuplicateQubit {
        /// Name of the gate.
        gate: String,
        /// The repeated wire index.
        qubit: u32,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
