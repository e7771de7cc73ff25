/// Parsing errors.
///
/// Defines the errors the parser can record while turning tokens into an
/// AST: unexpected tokens, tokens that cannot begin an expression, and
/// integer literals that do not fit the value type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every error evaluation can produce, from type mismatches and
/// unknown operations to bad built-in arguments. Each error carries the
/// token it arose from so it can be rendered as a source-pointing
/// diagnostic.
pub mod runtime_error;

/// Diagnostic rendering.
///
/// Turns a message and the token it concerns into the multi-line report
/// format shared by parser and evaluator errors, with a caret line marking
/// the offending span.
pub mod diagnostic;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
