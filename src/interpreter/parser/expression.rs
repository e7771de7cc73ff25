use std::rc::Rc;

use crate::{
    ast::{Identifier, Node},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Parses an expression at the given precedence level.
    ///
    /// This is the Pratt engine: the current token picks a unary parse
    /// function for the left-hand side, then infix forms are folded in for
    /// as long as the peek token binds strictly tighter than `precedence`.
    /// A token with no unary parse function is an error.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> ParseResult<Node> {
        let mut left = self.parse_unary_dispatch()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            left = match self.peek().kind {
                TokenKind::ParenOpen => {
                    self.next_token();
                    self.parse_call(left)?
                },
                TokenKind::BracketOpen => {
                    self.next_token();
                    self.parse_index(left)?
                },
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::LessThan
                | TokenKind::GreaterThan => {
                    self.next_token();
                    self.parse_binary(left)?
                },
                _ => break,
            };
        }

        Ok(left)
    }

    /// Dispatches on the current token to the unary parse function that can
    /// begin an expression with it.
    fn parse_unary_dispatch(&mut self) -> ParseResult<Node> {
        match self.cur().kind {
            TokenKind::ParenOpen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Bang | TokenKind::Minus => self.parse_unary(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::Identifier => {
                Ok(Node::Identifier(Identifier { token: self.cur().clone(),
                                                 name:  self.cur().literal.clone(), }))
            },
            TokenKind::True | TokenKind::False => {
                Ok(Node::BooleanLiteral { token: self.cur().clone(),
                                          value: self.cur_is(TokenKind::True), })
            },
            TokenKind::Integer => self.parse_integer_literal(),
            TokenKind::String => {
                Ok(Node::StringLiteral { token: self.cur().clone(),
                                         value: self.cur().literal.clone(), })
            },
            TokenKind::BracketOpen => self.parse_array_literal(),
            TokenKind::BraceOpen => self.parse_hash_literal(),
            _ => Err(ParseError::NoUnaryParseFn { token: self.cur().clone() }),
        }
    }

    /// Parses `( EXPR )`, yielding the inner expression unchanged.
    fn parse_grouped(&mut self) -> ParseResult<Node> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::ParenClose)?;
        Ok(expression)
    }

    /// Parses `if ( COND ) { ... }` with an optional `else { ... }`.
    fn parse_if(&mut self) -> ParseResult<Node> {
        let token = self.cur().clone();

        self.expect_peek(TokenKind::ParenOpen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::ParenClose)?;

        self.expect_peek(TokenKind::BraceOpen)?;
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::BraceOpen)?;
            Some(Box::new(self.parse_block()))
        } else {
            None
        };

        Ok(Node::If { token,
                      condition: Box::new(condition),
                      consequence: Box::new(consequence),
                      alternative })
    }

    /// Parses a prefix `!` or `-` applied to the expression after it.
    fn parse_unary(&mut self) -> ParseResult<Node> {
        let token = self.cur().clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Unary)?;

        Ok(Node::Unary { token,
                         right: Box::new(right) })
    }

    /// Parses the right operand of an infix operator; the cursor is on the
    /// operator itself. Parsing the right side at the operator's own
    /// precedence keeps equal-precedence chains left-associative.
    fn parse_binary(&mut self, left: Node) -> ParseResult<Node> {
        let token = self.cur().clone();
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Node::Binary { token,
                          left: Box::new(left),
                          right: Box::new(right) })
    }

    /// Parses `LEFT [ INDEX ]` with the cursor on the opening bracket.
    fn parse_index(&mut self, left: Node) -> ParseResult<Node> {
        let token = self.cur().clone();
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::BracketClose)?;

        Ok(Node::Index { token,
                         left: Box::new(left),
                         index: Box::new(index) })
    }

    /// Parses `CALLEE ( ARG, ... )` with the cursor on the opening paren.
    fn parse_call(&mut self, callee: Node) -> ParseResult<Node> {
        let token = self.cur().clone();
        let arguments = self.parse_expression_list(TokenKind::ParenClose)?;

        Ok(Node::Call { token,
                        callee: Box::new(callee),
                        arguments })
    }

    /// Parses `fn ( PARAMS? ) { BODY }`.
    fn parse_function_literal(&mut self) -> ParseResult<Node> {
        let token = self.cur().clone();

        self.expect_peek(TokenKind::ParenOpen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(TokenKind::BraceOpen)?;
        let body = self.parse_block();

        Ok(Node::FunctionLiteral { token,
                                   parameters,
                                   body: Rc::new(body) })
    }

    /// Parses a comma-separated identifier list up to the closing paren.
    fn parse_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::ParenClose) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier { token: self.cur().clone(),
                                     name:  self.cur().literal.clone(), });

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Identifier)?;
            parameters.push(Identifier { token: self.cur().clone(),
                                         name:  self.cur().literal.clone(), });
        }

        self.expect_peek(TokenKind::ParenClose)?;
        Ok(parameters)
    }

    /// Parses `[ EXPR, ... ]` or `[]`.
    fn parse_array_literal(&mut self) -> ParseResult<Node> {
        let token = self.cur().clone();
        let elements = self.parse_expression_list(TokenKind::BracketClose)?;

        Ok(Node::ArrayLiteral { token, elements })
    }

    /// Parses a comma-separated expression list terminated by `end`, used
    /// for array literals and call arguments. The cursor sits on the
    /// opening delimiter; an immediately following `end` yields an empty
    /// list.
    fn parse_expression_list(&mut self, end: TokenKind) -> ParseResult<Vec<Node>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Ok(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }

    /// Parses `{ KEY : VALUE, ... }` or `{}`. Keys and values are arbitrary
    /// expressions; pairs keep their source order.
    fn parse_hash_literal(&mut self) -> ParseResult<Node> {
        let token = self.cur().clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::BraceClose) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::BraceClose) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::BraceClose)?;
        Ok(Node::HashLiteral { token, pairs })
    }

    /// Parses a decimal integer literal into the 32-bit value type.
    fn parse_integer_literal(&mut self) -> ParseResult<Node> {
        let token = self.cur().clone();
        let value = token.literal
                         .parse::<i32>()
                         .map_err(|_| ParseError::IntegerOutOfRange { token: token.clone() })?;

        Ok(Node::IntegerLiteral { token, value })
    }
}
