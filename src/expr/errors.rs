//! Expression parsing error types.
//!
//! Every variant is an input-validation failure surfaced at the boundary,
//! before any root-finding runs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{c}' at byte {pos}")]
    UnexpectedChar { c: char, pos: usize },

    #[error("malformed number '{text}'")]
    MalformedNumber { text: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected token '{found}'")]
    UnexpectedToken { found: String },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("unknown identifier '{name}': the free variable is 'x'")]
    UnknownIdentifier { name: String },

    #[error("missing closing parenthesis")]
    MissingParen,

    #[error("trailing input '{found}' after expression")]
    TrailingInput { found: String },
}
