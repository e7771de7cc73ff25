/// The evaluator module executes AST nodes and computes values.
///
/// The evaluator walks the tree produced by the parser, resolving names
/// against chained environments, applying operators, building collections,
/// and calling functions and built-ins. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind, threading `return` through blocks.
/// - Manages environments and closure capture.
/// - Reports runtime errors carrying the offending token.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the token stream the
/// parser consumes: identifiers, integer and string literals, operators,
/// delimiters and keywords, each tagged with its source position and
/// enclosing line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, literal and location.
/// - Decodes string escape sequences.
/// - Marks unrecognized bytes as illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream with recursive descent for
/// statements and operator-precedence (Pratt) dispatch for expressions,
/// producing the program's root block. Errors are collected rather than
/// aborting the parse, so a single pass reports as much as it can.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces the precedence ladder and statement grammar.
/// - Accumulates rendered diagnostics for every syntax error found.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value variants the evaluator produces: null,
/// booleans, 32-bit integers, strings, arrays, hash maps, closures and
/// built-ins, along with hash-key derivation and the chained environments
/// that give the language lexical scope.
///
/// # Responsibilities
/// - Defines the `Value` enum, equality, and its inspection format.
/// - Derives hash keys for the hashable kinds.
/// - Provides environments with outer-scope lookup.
pub mod value;
