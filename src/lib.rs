//! # Introduction
//!
//! hal is the front end of a small programming language: a character-level
//! lexer and a recursive-descent parser that turns source text into an AST,
//! collecting syntax diagnostics along the way.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Program (+ diagnostics)
//! ```
//!
//! 1. [`parser`] — tokens, lexer, AST and parser.
//! 2. [`repl`] — line-at-a-time read loop printing tokens or parsed statements.
//! 3. [`config`] — command-line configuration for the `hal` binary.
//! 4. [`ui`] — ratatui-based explorer; not part of the stable library API.
//!
//! ## Language subset
//!
//! Tokens: identifiers, integers, `+ - ! * /`, `= += -= *= /=`,
//! `< > <= >= == !=`, `, ; ( ) { }`, keywords `let`, `return`, `fun`.
//! Statements: `let <name> = ...;` and `return ...;` (values are skipped).

pub mod config;
pub mod parser;
pub mod repl;
pub mod ui;
