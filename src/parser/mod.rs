//! hal source code front end
//!
//! This module transforms hal source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and keyword lookup
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`parse`]: The [`Parser`](parse::Parser) and its lookahead cursor
//! - `statements`: Statement parsing (`let`, `return`)
//! - [`ast`]: AST node definitions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! Expressions are not parsed yet; statement values are skipped up to `;`.

pub mod ast;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use ast::{Expression, Identifier, LetStatement, Program, ReturnStatement, Statement};
pub use lexer::Lexer;
pub use parse::{Parser, ParserOptions};
pub use token::{lookup_ident, Token, TokenKind};
