//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is a recursive-descent parser: statements are dispatched on
//! their leading token and expressions are parsed by precedence tiers.
//!
//! It maintains a single forward-moving cursor over the token stream; the
//! only lookahead is a non-consuming peek at the current and next token.

use crate::{
    ast::statements::Program,
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// Holds the full token stream (read-only) and the current cursor index.
/// The cursor starts at 0 and only ever moves forward; every grammar rule
/// consumes at least one token before recursing, so parsing is linear in
/// the token count.
pub struct Parser {
    /// The list of tokens to parse, terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Creates a new Parser over a token stream.
    ///
    /// The stream is expected to be terminated by an EOF token, as produced
    /// by the lexer; the parser never advances past it.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Returns the kind of the token after the current one, without
    /// consuming anything. EOF when the current token is the last one.
    pub fn next_token_kind(&self) -> TokenKind {
        match self.tokens.get(self.pos + 1) {
            Some(token) => token.kind,
            None => TokenKind::EOF,
        }
    }

    /// Advances to the next token and returns the consumed token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    /// Checks whether the current token has the given kind, non-consuming.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns
    /// a SyntaxError naming the expected kind and the found token.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<SyntaxError>,
    ) -> Result<Token, SyntaxError> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedToken {
                        expected: String::from(expected_kind.description()),
                        found: token.lexeme.clone(),
                    },
                    token.position,
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, SyntaxError> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    ///
    /// Returns true if the cursor is in range and the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the current cursor index into the token stream.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }

    /// Parses the whole token stream into a Program.
    ///
    /// Repeatedly parses top-level statements until the EOF token is
    /// reached. Stops at the first ungrammatical construct and returns its
    /// error; no recovery is attempted and no partial tree is returned.
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        let position = self.get_position();
        let mut statements = vec![];

        while self.has_tokens() {
            statements.push(parse_stmt(self)?);
        }

        Ok(Program {
            statements,
            position,
        })
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing: it builds a parser over the
/// stream and runs it to EOF, yielding the Program root or the first
/// syntax error.
pub fn parse(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse()
}
