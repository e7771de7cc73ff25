use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// The parser required one token kind but saw another.
    UnexpectedToken {
        /// The kind the grammar required here.
        expected: TokenKind,
        /// The token actually found.
        token:    Token,
    },
    /// The current token cannot begin an expression.
    NoUnaryParseFn {
        /// The token that has no unary parse function.
        token: Token,
    },
    /// An integer literal does not fit the 32-bit value type.
    IntegerOutOfRange {
        /// The offending integer token.
        token: Token,
    },
}

impl ParseError {
    /// The token this error points at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { token, .. }
            | Self::NoUnaryParseFn { token }
            | Self::IntegerOutOfRange { token } => token,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, token } => {
                write!(f, "expected {expected}, got {}", token.kind)
            },
            Self::NoUnaryParseFn { token } => {
                write!(f, "no unary parse function for {} found", token.kind)
            },
            Self::IntegerOutOfRange { token } => {
                write!(f, "could not parse '{}' as integer", token.literal)
            },
        }
    }
}

impl std::error::Error for ParseError {}
