use std::rc::Rc;

use logos::Logos;

/// Raw lexemes recognized by the generated lexer.
///
/// This enum only describes the textual patterns; `lex` converts each match
/// into a full [`Token`] with its source position and enclosing line.
/// Keywords are listed before the identifier pattern so that exact matches
/// like `fn` win over the general identifier rule.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum Raw {
    /// `fn`
    #[token("fn")]
    Function,
    /// `so`
    #[token("so")]
    Declaration,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; names such as `x` or `newAdder`. Digits are not
    /// part of identifiers, so `foo123` lexes as `foo` followed by `123`.
    #[regex(r"[A-Za-z_]+")]
    Identifier,
    /// Integer literal tokens, decimal only.
    #[regex(r"[0-9]+")]
    Integer,
    /// String literal tokens. The second pattern accepts a string that runs
    /// into the end of input without a closing quote.
    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    #[regex(r#""([^"\\]|\\[\s\S])*"#)]
    String,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    LessThan,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `==`
    #[token("==")]
    Equals,
    /// `!=`
    #[token("!=")]
    NotEquals,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    ParenOpen,
    /// `)`
    #[token(")")]
    ParenClose,
    /// `{`
    #[token("{")]
    BraceOpen,
    /// `}`
    #[token("}")]
    BraceClose,
    /// `[`
    #[token("[")]
    BracketOpen,
    /// `]`
    #[token("]")]
    BracketClose,
}

/// The category of a [`Token`].
///
/// Covers every lexeme the language knows plus the two structural kinds:
/// `Illegal` for bytes no pattern matches and `Eof` for the single sentinel
/// that terminates every token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte no pattern recognizes.
    Illegal,
    /// End of input. Emitted exactly once, last.
    Eof,
    /// A name such as `x` or `newAdder`.
    Identifier,
    /// A decimal integer literal.
    Integer,
    /// A string literal. The token's literal holds the decoded content.
    String,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `!`
    Bang,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `fn`
    Function,
    /// `so`
    Declaration,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl From<Raw> for TokenKind {
    fn from(raw: Raw) -> Self {
        match raw {
            Raw::Function => Self::Function,
            Raw::Declaration => Self::Declaration,
            Raw::True => Self::True,
            Raw::False => Self::False,
            Raw::If => Self::If,
            Raw::Else => Self::Else,
            Raw::Return => Self::Return,
            Raw::Identifier => Self::Identifier,
            Raw::Integer => Self::Integer,
            Raw::String => Self::String,
            Raw::Assign => Self::Assign,
            Raw::Plus => Self::Plus,
            Raw::Minus => Self::Minus,
            Raw::Asterisk => Self::Asterisk,
            Raw::Slash => Self::Slash,
            Raw::Bang => Self::Bang,
            Raw::LessThan => Self::LessThan,
            Raw::GreaterThan => Self::GreaterThan,
            Raw::Equals => Self::Equals,
            Raw::NotEquals => Self::NotEquals,
            Raw::Comma => Self::Comma,
            Raw::Colon => Self::Colon,
            Raw::Semicolon => Self::Semicolon,
            Raw::ParenOpen => Self::ParenOpen,
            Raw::ParenClose => Self::ParenClose,
            Raw::BraceOpen => Self::BraceOpen,
            Raw::BraceClose => Self::BraceClose,
            Raw::BracketOpen => Self::BracketOpen,
            Raw::BracketClose => Self::BracketClose,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::Illegal => "illegal",
            Self::Eof => "eof",
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::ParenOpen => "(",
            Self::ParenClose => ")",
            Self::BraceOpen => "{",
            Self::BraceClose => "}",
            Self::BracketOpen => "[",
            Self::BracketClose => "]",
            Self::Function => "fn",
            Self::Declaration => "so",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        };
        write!(f, "{description}")
    }
}

/// A single token produced by the lexer.
///
/// Besides its kind and literal text, a token carries everything a
/// diagnostic needs to point back into the source: the 1-based line and
/// column of its first character, the full text of the line it starts on,
/// and the optional file label the source was read from.
///
/// For string tokens the literal holds the decoded content, with escape
/// sequences already resolved. For every other kind it is the exact source
/// slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind:      TokenKind,
    /// The source slice, or the decoded content for strings.
    pub literal:   String,
    /// 1-based source line of the token's first character.
    pub line:      usize,
    /// 1-based column of the token's first character.
    pub column:    usize,
    /// The full source line containing the token's first character.
    pub line_text: Rc<str>,
    /// The file label supplied to `lex`, if any.
    pub file:      Option<Rc<str>>,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind.to_string();
        if kind == self.literal {
            write!(f, "{{{} {}:{}}}", kind, self.line, self.column)
        } else {
            write!(f, "{{{} {} {}:{}}}", kind, self.literal, self.line, self.column)
        }
    }
}

/// Converts a source string into its token stream.
///
/// The returned vector always ends with exactly one `Eof` token. Bytes that
/// match no pattern become `Illegal` tokens carrying the offending character
/// as their literal; lexing never fails.
///
/// # Parameters
/// - `source`: The program text, UTF-8.
/// - `file`: Optional file label recorded on every token for diagnostics.
///
/// # Returns
/// All tokens of `source` in input order, terminated by `Eof`.
///
/// # Example
/// ```
/// use gorb::interpreter::lexer::{lex, TokenKind};
///
/// let tokens = lex("so answer = 42;", None);
///
/// assert_eq!(tokens[0].kind, TokenKind::Declaration);
/// assert_eq!(tokens[1].literal, "answer");
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
/// ```
#[must_use]
pub fn lex(source: &str, file: Option<&str>) -> Vec<Token> {
    let file: Option<Rc<str>> = file.map(Rc::from);
    let lines = LineTable::new(source);

    let mut tokens = Vec::new();
    let mut lexer = Raw::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (kind, literal) = match result {
            Ok(Raw::String) => (TokenKind::String, decode_string(lexer.slice())),
            Ok(raw) => (TokenKind::from(raw), lexer.slice().to_string()),
            Err(()) => (TokenKind::Illegal, lexer.slice().to_string()),
        };
        tokens.push(lines.token(kind, literal, span.start, file.clone()));
    }

    tokens.push(lines.token(TokenKind::Eof, String::new(), source.len(), file));
    tokens
}

/// Precomputed line boundaries of a source string, used to turn byte
/// offsets into line/column positions.
struct LineTable<'src> {
    source: &'src str,
    starts: Vec<usize>,
    texts:  Vec<Rc<str>>,
}

impl<'src> LineTable<'src> {
    fn new(source: &'src str) -> Self {
        let mut starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(offset + 1);
            }
        }

        let texts = starts.iter()
                          .map(|&start| {
                              let rest = &source[start..];
                              let end = rest.find('\n').unwrap_or(rest.len());
                              Rc::from(rest[..end].trim_end_matches('\r'))
                          })
                          .collect();

        Self { source, starts, texts }
    }

    /// Builds a token whose first character sits at byte `offset`.
    fn token(&self, kind: TokenKind, literal: String, offset: usize, file: Option<Rc<str>>)
             -> Token {
        let offset = offset.min(self.source.len());
        let line = self.starts.partition_point(|&start| start <= offset) - 1;

        Token { kind,
                literal,
                line: line + 1,
                column: offset - self.starts[line] + 1,
                line_text: Rc::clone(&self.texts[line]),
                file }
    }
}

/// Decodes the body of a string literal slice, resolving escape sequences.
///
/// Recognized escapes are `\n`, `\r`, `\t`, `\\` and `\"`. Any other escaped
/// character stands for itself, so `\x` decodes to `x`. The closing quote is
/// optional; a literal cut off by the end of input decodes up to that point.
fn decode_string(slice: &str) -> String {
    let mut decoded = String::with_capacity(slice.len());
    let mut chars = slice[1..].chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            '\\' => match chars.next() {
                Some('n') => decoded.push('\n'),
                Some('r') => decoded.push('\r'),
                Some('t') => decoded.push('\t'),
                Some(other) => decoded.push(other),
                None => {}
            },
            other => decoded.push(other),
        }
    }

    decoded
}
