//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its lookahead cursor and the
//! main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser pulls tokens from a [`Lexer`] one at a time and keeps exactly two
//! of them: `current` and `peek`. Statement parsing lives in `statements`,
//! which extends the Parser with its own `impl Parser` block.
//!
//! # Diagnostics
//!
//! Syntax problems never abort parsing. They are collected as strings and read
//! back through [`Parser::errors`]. An empty list does not mean every
//! statement was kept: outside strict mode a malformed `let` or `return` is
//! dropped without a diagnostic (see [`ParserOptions`]).

use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};

/// Knobs that change how failures are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Record a diagnostic for every dropped statement instead of skipping
    /// it silently.
    pub strict: bool,
}

impl ParserOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Recursive descent parser with one token of lookahead
pub struct Parser {
    lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    errors: Vec<String>,
    pub(crate) options: ParserOptions,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self::with_options(lexer, ParserOptions::default())
    }

    pub fn with_options(lexer: Lexer, options: ParserOptions) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
            options,
        };

        // Fill both cursor slots
        parser.next_token();
        parser.next_token();

        parser
    }

    /// Convenience constructor over a source string.
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Parse statements until EOF. Always returns a program, possibly with
    /// fewer statements than the source contains.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    // ===== Helper methods =====

    /// Shift the cursor by one token.
    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if the peek token has the expected kind, otherwise record a
    /// diagnostic and leave the cursor alone.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub(crate) fn peek_error(&mut self, expected: TokenKind) {
        let actual = self.peek.kind;
        self.record_unexpected(expected, actual);
    }

    pub(crate) fn record_unexpected(&mut self, expected: TokenKind, actual: TokenKind) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            expected, actual
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_is_primed() {
        let parser = Parser::from_source("let x");
        assert_eq!(parser.current.kind, TokenKind::Let);
        assert_eq!(parser.peek.kind, TokenKind::Ident);
        assert_eq!(parser.peek.literal, "x");
    }

    #[test]
    fn test_expect_peek_advances_on_match() {
        let mut parser = Parser::from_source("let x = 5;");
        assert!(parser.expect_peek(TokenKind::Ident));
        assert_eq!(parser.current.literal, "x");
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn test_expect_peek_records_mismatch() {
        let mut parser = Parser::from_source("let = 5;");
        assert!(!parser.expect_peek(TokenKind::Ident));
        assert_eq!(parser.current.kind, TokenKind::Let);
        assert_eq!(
            parser.errors(),
            ["expected next token to be IDENT, got ASSIGN instead"]
        );
    }

    #[test]
    fn test_empty_source() {
        let mut parser = Parser::from_source("");
        let program = parser.parse_program();
        assert!(program.statements.is_empty());
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn test_unrecognised_statements_are_skipped() {
        let mut parser = Parser::from_source("x + 1; fun (a) { a }; @");
        let program = parser.parse_program();
        assert!(program.statements.is_empty());
        assert!(parser.errors().is_empty());
    }
}
