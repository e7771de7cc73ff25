use crate::interpreter::{lexer::Token, value::core::ValueKind};

#[derive(Debug, Clone)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant records the token the failing node was parsed from, which
/// is what lets the diagnostic renderer point back into source. The
/// `Display` impl produces only the message line; the full report comes
/// from [`crate::error::diagnostic::render`].
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different kinds.
    TypeMismatch {
        /// Kind of the left operand.
        left:     ValueKind,
        /// The operator as written in source.
        operator: String,
        /// Kind of the right operand.
        right:    ValueKind,
        /// The operator token.
        token:    Token,
    },
    /// A prefix operator was applied to an operand it does not support.
    UnknownUnaryOperation {
        /// The operator as written in source.
        operator: String,
        /// Kind of the operand.
        right:    ValueKind,
        /// The operator token.
        token:    Token,
    },
    /// An infix operator was applied to same-kind operands it does not
    /// support.
    UnknownBinaryOperation {
        /// Kind of the left operand.
        left:     ValueKind,
        /// The operator as written in source.
        operator: String,
        /// Kind of the right operand.
        right:    ValueKind,
        /// The operator token.
        token:    Token,
    },
    /// A name was neither bound in any enclosing environment nor a
    /// built-in.
    IdentifierNotFound {
        /// The unresolved name.
        name:  String,
        /// The identifier token.
        token: Token,
    },
    /// A built-in was handed an argument kind it does not work on.
    UnsupportedArgument {
        /// Name of the built-in.
        builtin: &'static str,
        /// Kind of the rejected argument.
        kind:    ValueKind,
        /// The call token.
        token:   Token,
    },
    /// A call supplied the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments the callee takes.
        expected: usize,
        /// How many arguments the call supplied.
        got:      usize,
        /// The call token.
        token:    Token,
    },
    /// A value that cannot be hashed was used as a hash key.
    UnhashableKey {
        /// Kind of the rejected key.
        kind:  ValueKind,
        /// The token of the key expression or index.
        token: Token,
    },
    /// The index operator was applied to a value that is not indexable.
    IndexNotSupported {
        /// Kind of the indexed value.
        kind:  ValueKind,
        /// The `[` token.
        token: Token,
    },
    /// A call was made on a value that is not callable.
    NotAFunction {
        /// Kind of the called value.
        kind:  ValueKind,
        /// The `(` token.
        token: Token,
    },
    /// Integer division with a zero divisor.
    DivisionByZero {
        /// The `/` token.
        token: Token,
    },
}

impl RuntimeError {
    /// The token this error points at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::TypeMismatch { token, .. }
            | Self::UnknownUnaryOperation { token, .. }
            | Self::UnknownBinaryOperation { token, .. }
            | Self::IdentifierNotFound { token, .. }
            | Self::UnsupportedArgument { token, .. }
            | Self::WrongArgumentCount { token, .. }
            | Self::UnhashableKey { token, .. }
            | Self::IndexNotSupported { token, .. }
            | Self::NotAFunction { token, .. }
            | Self::DivisionByZero { token } => token,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right,
                                 .. } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownUnaryOperation { operator, right, .. } => {
                write!(f, "unknown operation: {operator}{right}")
            },
            Self::UnknownBinaryOperation { left,
                                           operator,
                                           right,
                                           .. } => {
                write!(f, "unknown operation: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name, .. } => {
                write!(f, "identifier '{name}' not found")
            },
            Self::UnsupportedArgument { builtin, kind, .. } => {
                write!(f, "'{builtin}' does not support {kind}")
            },
            Self::WrongArgumentCount { expected, got, .. } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(f, "expected {expected} argument{plural}, got {got}")
            },
            Self::UnhashableKey { kind, .. } => {
                write!(f, "{kind} is unusable as hash key")
            },
            Self::IndexNotSupported { kind, .. } => {
                write!(f, "index operator is not supported on {kind}")
            },
            Self::NotAFunction { kind, .. } => write!(f, "{kind} is not a function"),
            Self::DivisionByZero { .. } => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
