//! # gorb
//!
//! gorb is a small expression-oriented scripting language with first-class
//! functions, closures, integers, booleans, strings, arrays, and hash maps.
//! Source text goes through a lexer and a Pratt-style parser into an
//! abstract syntax tree, which a tree-walking evaluator runs against
//! lexically scoped environments. There is no bytecode and no persistent
//! state; a program is just text in, value (or diagnostic) out.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fmt, io::Write, rc::Rc};

use crate::{
    error::{RuntimeError, diagnostic},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::lex,
        parser::core::Parser,
        value::{core::Value, environment::Environment},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents source text as a
/// tree. Statements and expressions share the node space; every node keeps
/// the token it was parsed from so errors can point back into source, and
/// printing a node reproduces a canonical form of the program.
///
/// # Responsibilities
/// - Defines the node variants for all language constructs.
/// - Attaches source tokens to every node for error reporting.
/// - Renders nodes in the fully parenthesized debug form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code, along with the diagnostic renderer that turns a
/// message and a token into a source-pointing report.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failures.
/// - Carries the offending token on every error.
/// - Renders the shared multi-line diagnostic format.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and environments to provide a complete runtime for gorb
/// source. [`run`] is the public entry point the driver and the tests both
/// use.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Provides entry points for interpreting source text.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Everything that can keep a source string from producing a value.
#[derive(Debug)]
pub enum RunError {
    /// The source did not parse. Holds one rendered diagnostic per syntax
    /// error found; the list is never empty.
    Syntax(Vec<String>),
    /// The source parsed but evaluation failed.
    Runtime(RuntimeError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(diagnostics) => {
                writeln!(f, "syntax error!")?;
                for (index, rendered) in diagnostics.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{rendered}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => {
                write!(f, "{}", diagnostic::render(&error.to_string(), error.token()))
            },
        }
    }
}

impl std::error::Error for RunError {}

/// Interprets a source string in the given environment.
///
/// Runs the full pipeline: lexing, parsing, and evaluation. Parsing always
/// consumes the whole input and reports every syntax error it finds; with
/// any syntax error present, evaluation is skipped. The environment carries
/// bindings across calls, which is what gives the REPL its persistent
/// state.
///
/// # Parameters
/// - `source`: The program text.
/// - `file`: Optional file label used in diagnostics.
/// - `env`: The environment to evaluate in.
/// - `out`: Sink for `puts` output.
///
/// # Returns
/// The value of the program's last statement.
///
/// # Errors
/// [`RunError::Syntax`] with every parser diagnostic, or
/// [`RunError::Runtime`] with the first evaluation failure.
///
/// # Example
/// ```
/// use gorb::{interpreter::value::environment::Environment, run};
///
/// let env = Environment::new();
/// let value = run("so x = 2; x * 21;", None, &env, &mut std::io::sink()).unwrap();
///
/// assert_eq!(value.to_string(), "42");
/// ```
pub fn run(source: &str,
           file: Option<&str>,
           env: &Rc<Environment>,
           out: &mut dyn Write)
           -> Result<Value, RunError> {
    let mut parser = Parser::new(lex(source, file));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(RunError::Syntax(parser.errors().to_vec()));
    }

    Evaluator::new(out).eval_program(&program, env).map_err(RunError::Runtime)
}
