use crate::{
    ast::{Identifier, Node},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Parses the whole token stream into the program's root block.
    ///
    /// Statements are collected until the `Eof` sentinel. A statement that
    /// fails to parse is recorded in the error list and the cursor moves on
    /// one token, so later statements are still examined. Callers must
    /// check [`errors`](Self::errors) before evaluating the result; with a
    /// non-empty error list the returned block is partial.
    ///
    /// # Example
    /// ```
    /// use gorb::interpreter::{lexer::lex, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(lex("so x = 1 + 2;", None));
    /// let program = parser.parse_program();
    ///
    /// assert!(parser.errors().is_empty());
    /// assert_eq!(program.to_string(), "so x = (1 + 2);");
    /// ```
    pub fn parse_program(&mut self) -> Node {
        let token = self.cur().clone();
        let mut statements = Vec::new();

        while !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.record(&error),
            }
            self.next_token();
        }

        Node::Block { token, statements }
    }

    /// Parses one statement: a declaration, a `return`, or a bare
    /// expression. Trailing semicolons are consumed but not required.
    fn parse_statement(&mut self) -> ParseResult<Node> {
        match self.cur().kind {
            TokenKind::Declaration => self.parse_declaration(),
            TokenKind::Return => self.parse_return(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `so NAME = EXPR ;?`.
    fn parse_declaration(&mut self) -> ParseResult<Node> {
        let token = self.cur().clone();

        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier { token: self.cur().clone(),
                                name:  self.cur().literal.clone(), };

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolons();

        Ok(Node::Declaration { token,
                               name,
                               value: Box::new(value) })
    }

    /// Parses `return EXPR ;?`.
    fn parse_return(&mut self) -> ParseResult<Node> {
        let token = self.cur().clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolons();

        Ok(Node::Return { token,
                          value: Box::new(value) })
    }

    /// Parses an expression in statement position; the expression itself
    /// becomes the statement node.
    fn parse_expression_statement(&mut self) -> ParseResult<Node> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolons();
        Ok(expression)
    }

    /// Parses `{ statement* }` with the cursor on the opening brace.
    ///
    /// A statement error inside the block is recorded and parsing resumes
    /// with the next token, mirroring the top-level loop. The block ends at
    /// the closing brace, or silently at `Eof` when the brace is missing.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> Node {
        let token = self.cur().clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.cur_is(TokenKind::BraceClose) && !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.record(&error),
            }
            self.next_token();
        }

        Node::Block { token, statements }
    }

    /// Consumes any run of semicolons after a statement.
    fn skip_semicolons(&mut self) {
        while self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
