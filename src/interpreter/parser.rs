/// Parser state and the Pratt expression engine.
///
/// Holds the token cursor, the precedence ladder, and the error list that
/// collects rendered diagnostics as parsing proceeds.
pub mod core;
/// Expression parsing.
///
/// The unary (prefix) and binary (infix) parse functions the Pratt engine
/// dispatches to, plus all literal forms.
pub mod expression;
/// Statement parsing.
///
/// Declarations, `return` statements, expression statements, blocks, and
/// the program loop.
pub mod statement;
