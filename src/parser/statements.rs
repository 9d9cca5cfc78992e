//! Statement parsing implementation
//!
//! ```text
//! statement ::= let_stmt | return_stmt
//! let_stmt    ::= 'let' IDENT '=' <tokens> ';'
//! return_stmt ::= 'return' <tokens> ';'
//! ```
//!
//! Expressions are not parsed yet: everything between the statement head and
//! the terminating `;` is skipped, and the value slots stay `None`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser {
    /// Dispatch on the current token. Anything that does not start a known
    /// statement yields `None`, which is not an error.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => None,
        }
    }

    /// Parse `let <ident> = ... ;`
    pub(crate) fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();

        if !self.advance_if_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.advance_if_peek(TokenKind::Assign) {
            return None;
        }

        if !self.skip_to_semicolon() {
            return None;
        }

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    /// Parse `return ... ;`
    pub(crate) fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.current.clone();

        self.next_token();

        if !self.skip_to_semicolon() {
            return None;
        }

        Some(ReturnStatement {
            token,
            return_value: None,
        })
    }

    /// Peek check used by statement heads.
    ///
    /// In strict mode this is [`Parser::expect_peek`]. Otherwise a mismatch
    /// fails quietly: the statement is dropped and nothing is recorded.
    fn advance_if_peek(&mut self, kind: TokenKind) -> bool {
        if self.options.strict {
            return self.expect_peek(kind);
        }

        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Skip tokens until the current one is `;`. Returns `false` if EOF came
    /// first, which in strict mode is also recorded.
    fn skip_to_semicolon(&mut self) -> bool {
        while !self.current_is(TokenKind::Semicolon) {
            if self.current_is(TokenKind::Eof) {
                if self.options.strict {
                    self.record_unexpected(TokenKind::Semicolon, TokenKind::Eof);
                }
                return false;
            }
            self.next_token();
        }
        true
    }
}
