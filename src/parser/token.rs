//! Token model
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was built
//! from. Identifiers that spell a keyword are reclassified through
//! [`lookup_ident`] at lex time.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Closed set of lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Plus,     // +
    Minus,    // -
    Exclaim,  // !
    Multiply, // *
    Divide,   // /

    // Assignment
    Assign,  // =
    PlusEq,  // +=
    MinusEq, // -=
    MultEq,  // *=
    DivEq,   // /=

    // Comparison
    Lt,  // <
    Gt,  // >
    LEq, // <=
    GEq, // >=
    Eq,  // ==
    NEq, // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    Return,
}

impl TokenKind {
    /// Stable vocabulary name, used in diagnostics and REPL output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Exclaim => "EXCLAIM",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::PlusEq => "PLUSEQ",
            TokenKind::MinusEq => "MINUSEQ",
            TokenKind::MultEq => "MULTEQ",
            TokenKind::DivEq => "DIVEQ",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::LEq => "LEQ",
            TokenKind::GEq => "GEQ",
            TokenKind::Eq => "EQ",
            TokenKind::NEq => "NEQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Function | TokenKind::Let | TokenKind::Return)
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Exclaim
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Assign
                | TokenKind::PlusEq
                | TokenKind::MinusEq
                | TokenKind::MultEq
                | TokenKind::DivEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LEq
                | TokenKind::GEq
                | TokenKind::Eq
                | TokenKind::NEq
        )
    }

    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical unit: its kind, the source text it came from, and where it starts.
///
/// `location` is informational; two tokens with the same kind and literal
/// describe the same lexeme regardless of where they appeared.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    /// The token the parser cursor holds before anything has been read.
    pub(crate) fn eof() -> Self {
        Self::new(TokenKind::Eof, "", SourceLocation::new(1, 1))
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.literal == other.literal
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("fun", TokenKind::Function);
        table.insert("let", TokenKind::Let);
        table.insert("return", TokenKind::Return);
        table
    })
}

/// Classify an identifier: its keyword kind if it spells one, otherwise `Ident`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keywords().get(ident).copied().unwrap_or(TokenKind::Ident)
}
