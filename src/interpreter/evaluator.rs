/// Built-in function implementations.
///
/// The fixed table of host functions the evaluator consults when an
/// identifier is not bound in any environment.
pub mod builtin;
/// Infix operator evaluation.
///
/// Integer arithmetic and comparison, string concatenation, and the
/// cross-kind equality rules.
pub mod binary;
/// Evaluator state, control flow, and node dispatch.
///
/// Defines the `Evaluator`, the `Flow` channel that threads `return` and
/// errors through blocks, and the dispatch over every AST node kind.
pub mod core;
/// Function application.
///
/// Calling closures with fresh enclosed environments and dispatching to
/// built-ins.
pub mod function;
/// Index operator evaluation for arrays and hashes.
pub mod index;
/// Prefix operator evaluation.
pub mod unary;
