use crate::interpreter::lexer::{Token, TokenKind};

/// Renders a message and the token it concerns as a multi-line diagnostic.
///
/// The report names the error, gives the `file:line:column` location, shows
/// the source line the token starts on, and underlines the token with
/// carets:
///
/// ```text
/// error: identifier 'foo' not found
/// script.gorb:2:5
/// so x = foo;
///        ^^^ here
/// ```
///
/// The caret run is as wide as the token's literal, at least one caret, and
/// two wider for string tokens to cover the surrounding quotes. When no
/// file label was supplied the location line simply starts with the colon.
#[must_use]
pub fn render(message: &str, token: &Token) -> String {
    let file = token.file.as_deref().unwrap_or("");
    let width = token.literal.len().max(1)
                + if token.kind == TokenKind::String { 2 } else { 0 };

    format!("error: {message}\n{file}:{line}:{column}\n{text}\n{pad}{carets} here",
            line = token.line,
            column = token.column,
            text = token.line_text,
            pad = " ".repeat(token.column.saturating_sub(1)),
            carets = "^".repeat(width))
}
