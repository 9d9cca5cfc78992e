//! Line-oriented read loop
//!
//! Each input line is handed to a fresh [`Lexer`]. Depending on [`ReplMode`]
//! the loop prints the raw token stream or the parsed statements together
//! with any diagnostics.

use crate::parser::{Lexer, Parser, ParserOptions, TokenKind};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// What the loop prints for each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplMode {
    /// One `{Type:.. Literal:..}` line per token, EOF excluded
    #[default]
    Tokens,
    /// The parsed program, then diagnostics
    Parse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplOptions {
    pub mode: ReplMode,
    pub parser: ParserOptions,
    /// Emit ANSI styling (prompt, illegal tokens, diagnostics)
    pub color: bool,
}

/// Run the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    options: ReplOptions,
) -> io::Result<()> {
    let mut buf = Vec::new();

    loop {
        if options.color {
            write!(output, "{}", PROMPT.bold())?;
        } else {
            write!(output, "{}", PROMPT)?;
        }
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        // Undecodable bytes lex as ILLEGAL replacement characters
        let line = String::from_utf8_lossy(&buf);

        match options.mode {
            ReplMode::Tokens => print_tokens(&line, &mut output, options.color)?,
            ReplMode::Parse => print_program(&line, &mut output, &options)?,
        }
    }
}

fn print_tokens<W: Write>(line: &str, output: &mut W, color: bool) -> io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let tok = lexer.next_token();
        match tok.kind {
            TokenKind::Eof => return Ok(()),
            TokenKind::Illegal if color => writeln!(output, "{}", tok.to_string().red())?,
            _ => writeln!(output, "{}", tok)?,
        }
    }
}

fn print_program<W: Write>(line: &str, output: &mut W, options: &ReplOptions) -> io::Result<()> {
    let mut parser = Parser::with_options(Lexer::new(line), options.parser);
    let program = parser.parse_program();

    write!(output, "{}", program)?;

    if !parser.errors().is_empty() {
        writeln!(output, "parser errors:")?;
        for msg in parser.errors() {
            if options.color {
                writeln!(output, "\t{}", msg.as_str().red())?;
            } else {
                writeln!(output, "\t{}", msg)?;
            }
        }
    }

    Ok(())
}
