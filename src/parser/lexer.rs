//! Lexer (tokenizer) for hal source code
//!
//! Converts raw source text into [`Token`]s one call at a time. The parser
//! pulls from [`Lexer::next_token`]; callers that want the whole stream at
//! once use [`Lexer::tokenize`].
//!
//! The lexer never fails. Characters it does not recognise come back as
//! [`TokenKind::Illegal`] tokens carrying the offending character.
//!
//! # Limitations
//!
//! - `'\0'` marks both "nothing read yet" and "end of input", so a NUL
//!   character inside the source produces an EOF token at that point.
//! - Identifiers are letters and underscores only: `foo1` lexes as the
//!   identifier `foo` followed by the integer `1`.
//! - Integers are plain digit runs with no sign, fraction or exponent.

use super::ast::SourceLocation;
use super::token::{lookup_ident, Token, TokenKind};

/// Sentinel for "no current character".
const NUL: char = '\0';

/// Character-level scanner with one character of lookahead.
pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch`.
    position: usize,
    /// Index of the character after `ch`.
    read_position: usize,
    ch: char,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer positioned on the first character of `input`.
    pub fn new(input: &str) -> Self {
        let input: Vec<char> = input.chars().collect();
        let ch = input.first().copied().unwrap_or(NUL);
        Self {
            input,
            position: 0,
            read_position: 1,
            ch,
            line: 1,
            column: 1,
        }
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted every further call returns an EOF token
    /// with an empty literal.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();

        let token = match self.ch {
            '=' => self.maybe_compound(TokenKind::Assign, TokenKind::Eq, loc),
            '+' => self.maybe_compound(TokenKind::Plus, TokenKind::PlusEq, loc),
            '-' => self.maybe_compound(TokenKind::Minus, TokenKind::MinusEq, loc),
            '!' => self.maybe_compound(TokenKind::Exclaim, TokenKind::NEq, loc),
            '*' => self.maybe_compound(TokenKind::Multiply, TokenKind::MultEq, loc),
            '/' => self.maybe_compound(TokenKind::Divide, TokenKind::DivEq, loc),
            '<' => self.maybe_compound(TokenKind::Lt, TokenKind::LEq, loc),
            '>' => self.maybe_compound(TokenKind::Gt, TokenKind::GEq, loc),
            ';' => self.single(TokenKind::Semicolon, loc),
            '(' => self.single(TokenKind::LParen, loc),
            ')' => self.single(TokenKind::RParen, loc),
            ',' => self.single(TokenKind::Comma, loc),
            '{' => self.single(TokenKind::LBrace, loc),
            '}' => self.single(TokenKind::RBrace, loc),
            NUL => Token::new(TokenKind::Eof, "", loc),
            ch if is_letter(ch) => {
                // The scan loop leaves the cursor past the run already.
                let literal = self.read_while(is_letter);
                let kind = lookup_ident(&literal);
                return Token::new(kind, literal, loc);
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_while(|c| c.is_ascii_digit());
                return Token::new(TokenKind::Int, literal, loc);
            }
            _ => self.single(TokenKind::Illegal, loc),
        };

        self.read_char();
        token
    }

    /// Drain the lexer into a vector ending with (and including) the first EOF.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    fn single(&self, kind: TokenKind, loc: SourceLocation) -> Token {
        Token::new(kind, self.ch.to_string(), loc)
    }

    /// Emit `compound` when the next character is `=`, otherwise `simple`.
    /// Only the compound case consumes the peeked character.
    fn maybe_compound(
        &mut self,
        simple: TokenKind,
        compound: TokenKind,
        loc: SourceLocation,
    ) -> Token {
        if self.peek_char() == '=' {
            let first = self.ch;
            self.read_char();
            let mut literal = String::with_capacity(2);
            literal.push(first);
            literal.push(self.ch);
            Token::new(compound, literal, loc)
        } else {
            self.single(simple, loc)
        }
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.ch != NUL && accept(self.ch) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }

    /// Move to the next character. Saturates at the end of input.
    fn read_char(&mut self) {
        if self.position < self.input.len() {
            if self.ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.position = self.read_position.min(self.input.len());
        self.read_position = self.position + 1;
        self.ch = self.input.get(self.position).copied().unwrap_or(NUL);
    }

    fn peek_char(&self) -> char {
        self.input.get(self.read_position).copied().unwrap_or(NUL)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// ASCII letters and underscore. Digits are deliberately excluded.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}
