use std::{fmt, rc::Rc};

use crate::interpreter::lexer::Token;

/// A name occurring in source, either as an expression or as the target of
/// a declaration or function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    /// The name itself.
    pub name:  String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An abstract syntax tree node.
///
/// Statements and expressions share this one node space: a statement is
/// simply any node appearing directly inside a block. Every variant carries
/// the token it was parsed from so diagnostics can point at source.
///
/// Nodes have no behavior beyond printing. The `Display` impl renders the
/// canonical debug form used by the `-a` dump and the parser tests, with
/// binary and unary expressions fully parenthesized.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A sequence of statements. Doubles as the program root and as the
    /// body of functions and `if` arms.
    Block {
        /// The opening token (`{`, or the program's first token).
        token:      Token,
        /// The statements in source order.
        statements: Vec<Node>,
    },
    /// `return EXPR;`
    Return {
        /// The `return` token.
        token: Token,
        /// The returned expression.
        value: Box<Node>,
    },
    /// `so NAME = EXPR;`
    Declaration {
        /// The `so` token.
        token: Token,
        /// The bound name.
        name:  Identifier,
        /// The bound expression.
        value: Box<Node>,
    },
    /// `if (COND) { ... } else { ... }`, the `else` arm optional.
    If {
        /// The `if` token.
        token:       Token,
        /// The condition expression.
        condition:   Box<Node>,
        /// Block evaluated when the condition is truthy.
        consequence: Box<Node>,
        /// Block evaluated otherwise, if present.
        alternative: Option<Box<Node>>,
    },
    /// `LEFT[INDEX]`
    Index {
        /// The `[` token.
        token: Token,
        /// The indexed expression.
        left:  Box<Node>,
        /// The index expression.
        index: Box<Node>,
    },
    /// `CALLEE(ARG, ...)`
    Call {
        /// The `(` token.
        token:     Token,
        /// The called expression.
        callee:    Box<Node>,
        /// Argument expressions, left to right.
        arguments: Vec<Node>,
    },
    /// A prefix operation, `!EXPR` or `-EXPR`.
    Unary {
        /// The operator token.
        token: Token,
        /// The operand.
        right: Box<Node>,
    },
    /// An infix operation such as `LEFT + RIGHT`.
    Binary {
        /// The operator token.
        token: Token,
        /// Left operand.
        left:  Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
    /// A name used as an expression.
    Identifier(Identifier),
    /// `true` or `false`.
    BooleanLiteral {
        /// The keyword token.
        token: Token,
        /// The literal value.
        value: bool,
    },
    /// A decimal integer literal.
    IntegerLiteral {
        /// The integer token.
        token: Token,
        /// The parsed 32-bit value.
        value: i32,
    },
    /// A string literal, already decoded by the lexer.
    StringLiteral {
        /// The string token.
        token: Token,
        /// The decoded content.
        value: String,
    },
    /// `[e1, e2, ...]`
    ArrayLiteral {
        /// The `[` token.
        token:    Token,
        /// Element expressions, left to right.
        elements: Vec<Node>,
    },
    /// `{k1: v1, k2: v2, ...}` with keys and values both arbitrary
    /// expressions. Pairs keep their parse order.
    HashLiteral {
        /// The `{` token.
        token: Token,
        /// Key/value expression pairs in source order.
        pairs: Vec<(Node, Node)>,
    },
    /// `fn(p1, p2) { body }`
    FunctionLiteral {
        /// The `fn` token.
        token:      Token,
        /// Parameter names.
        parameters: Vec<Identifier>,
        /// The body block, shared with any closure built from this literal.
        body:       Rc<Node>,
    },
}

impl Node {
    /// The token this node was parsed from.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Block { token, .. }
            | Self::Return { token, .. }
            | Self::Declaration { token, .. }
            | Self::If { token, .. }
            | Self::Index { token, .. }
            | Self::Call { token, .. }
            | Self::Unary { token, .. }
            | Self::Binary { token, .. }
            | Self::BooleanLiteral { token, .. }
            | Self::IntegerLiteral { token, .. }
            | Self::StringLiteral { token, .. }
            | Self::ArrayLiteral { token, .. }
            | Self::HashLiteral { token, .. }
            | Self::FunctionLiteral { token, .. } => token,
            Self::Identifier(identifier) => &identifier.token,
        }
    }
}

/// Joins the `Display` forms of a node list with `", "`.
fn join(nodes: &[Node]) -> String {
    nodes.iter()
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join(", ")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block { statements, .. } => {
                for statement in statements {
                    write!(f, "{statement}")?;
                }
                Ok(())
            },
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Declaration { name, value, .. } => write!(f, "so {name} = {value};"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::Call { callee, arguments, .. } => write!(f, "{callee}({})", join(arguments)),
            Self::Unary { token, right } => write!(f, "({}{right})", token.literal),
            Self::Binary { token, left, right } => {
                write!(f, "({left} {} {right})", token.literal)
            },
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::ArrayLiteral { elements, .. } => write!(f, "[{}]", join(elements)),
            Self::HashLiteral { pairs, .. } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key}:{value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                let parameters = parameters.iter()
                                           .map(ToString::to_string)
                                           .collect::<Vec<_>>()
                                           .join(", ");
                write!(f, "fn({parameters}){{{body}}}")
            },
        }
    }
}
