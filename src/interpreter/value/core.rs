use std::{collections::HashMap, fmt, io::Write, rc::Rc};

use crate::{
    ast::{Identifier, Node},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::environment::Environment},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type an expression can produce. Collection
/// variants share their contents through `Rc`: values are logically
/// immutable after construction, so the built-ins that "modify" a
/// collection build a new one instead.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value. Produced by declarations, by `if` without a taken
    /// branch, and by out-of-range indexing.
    Null,
    /// A boolean value, `true` or `false`. Produced by comparison
    /// operators and by the `!` prefix; drives `if` conditions through
    /// truthiness.
    Boolean(bool),
    /// A 32-bit signed integer. Arithmetic wraps two's-complement.
    Integer(i32),
    /// An immutable string. Indexing and slicing do not exist; `+`
    /// concatenates into a new string.
    String(Rc<str>),
    /// An ordered sequence of values.
    Array(Rc<Vec<Value>>),
    /// A map from hash keys to key/value pairs. The original key value is
    /// kept alongside each stored value so inspection can show it.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A closure: parameters, body, and the environment captured where the
    /// `fn` literal was evaluated.
    Function(Rc<FunctionValue>),
    /// A host function from the built-in table.
    Builtin(Builtin),
}

/// The kind tag of a [`Value`], used in error messages and hash keys.
///
/// Its `Display` form is the bracketed tag the error taxonomy uses, for
/// example `[integer]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `[null]`
    Null,
    /// `[boolean]`
    Boolean,
    /// `[integer]`
    Integer,
    /// `[string]`
    String,
    /// `[array]`
    Array,
    /// `[hash]`
    Hash,
    /// `[function]`
    Function,
    /// `[builtin]`
    Builtin,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Array => "array",
            Self::Hash => "hash",
            Self::Function => "function",
            Self::Builtin => "builtin",
        };
        write!(f, "[{tag}]")
    }
}

/// A lookup key derived from a hashable value.
///
/// Only booleans, integers and strings are hashable. The key combines the
/// kind tag with a 64-bit payload: 0 or 1 for booleans, the widened value
/// for integers, and an FNV-1a digest of the bytes for strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    kind:  ValueKind,
    value: u64,
}

/// One entry of a hash value: the original key alongside the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written, kept for inspection.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

/// A user function closed over its defining environment.
pub struct FunctionValue {
    /// Parameter names, bound left to right at each call.
    pub parameters: Vec<Identifier>,
    /// The body block, shared with the AST.
    pub body:       Rc<Node>,
    /// The environment captured when the literal was evaluated.
    pub env:        Rc<Environment>,
}

impl fmt::Debug for FunctionValue {
    // The captured environment may contain this very function; eliding it
    // keeps Debug from recursing forever.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// The signature shared by all built-in functions.
///
/// A built-in receives the evaluated arguments, the call token for
/// diagnostics, and the interpreter's output sink.
pub type BuiltinFn = fn(&[Value], &Token, &mut dyn Write) -> EvalResult<Value>;

/// A named host function from the built-in table.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the function is looked up under.
    pub name: &'static str,
    /// The host implementation.
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish_non_exhaustive()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over a byte slice.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
                    (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
                })
}

impl Value {
    /// The kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Hash(_) => ValueKind::Hash,
            Self::Function(_) => ValueKind::Function,
            Self::Builtin(_) => ValueKind::Builtin,
        }
    }

    /// Whether this value counts as true in a condition.
    ///
    /// Only `false` and `Null` are falsy; everything else, including `0`,
    /// the empty string and empty collections, is truthy.
    ///
    /// # Example
    /// ```
    /// use gorb::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Derives the lookup key for this value, or reports that its kind is
    /// not hashable.
    ///
    /// # Parameters
    /// - `token`: The token of the key expression, for diagnostics.
    ///
    /// # Errors
    /// `RuntimeError::UnhashableKey` for every kind other than boolean,
    /// integer and string.
    pub fn hash_key(&self, token: &Token) -> Result<HashKey, RuntimeError> {
        match self {
            Self::Boolean(b) => Ok(HashKey { kind:  ValueKind::Boolean,
                                             value: u64::from(*b), }),
            Self::Integer(i) => Ok(HashKey { kind:  ValueKind::Integer,
                                             value: i64::from(*i) as u64, }),
            Self::String(s) => Ok(HashKey { kind:  ValueKind::String,
                                            value: fnv1a(s.as_bytes()), }),
            _ => Err(RuntimeError::UnhashableKey { kind:  self.kind(),
                                                   token: token.clone(), }),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality within a kind; values of different kinds are
    /// never equal. Functions compare by closure identity rather than by
    /// structure, since two closures with equal bodies may still capture
    /// different environments.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => {
                a.len() == b.len()
                && a.iter()
                    .all(|(key, pair)| b.get(key).is_some_and(|other| other.value == pair.value))
            },
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// The inspection form: what `puts` writes and what the REPL prints
    /// after each line. Strings appear without quotes; hash entries appear
    /// in map order, which is unspecified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                let parameters = function.parameters
                                         .iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "fn({parameters}){{{}}}", function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}
