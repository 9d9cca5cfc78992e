//! Source pane rendering with syntax highlighting
//!
//! Highlighting runs the real [`Lexer`] over each line, so what is colored
//! is exactly what the parser sees. No token spans a newline, so per-line
//! lexing matches lexing the whole buffer up to the first NUL character.
//! The buffer lexer stops there, while lines after it are still coloured.

use crate::parser::{Lexer, TokenKind};
use crate::ui::theme::{border_style, token_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split one source line into styled spans, one per token plus raw gaps.
pub fn highlight_line(line: &str) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut pos = 0;

    let mut lexer = Lexer::new(line);
    loop {
        let tok = lexer.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }

        let start = tok.location.column - 1;
        if start > pos {
            spans.push(Span::raw(chars[pos..start].iter().collect::<String>()));
        }
        pos = start + tok.literal.chars().count();
        spans.push(Span::styled(tok.literal, token_style(tok.kind)));
    }

    if pos < chars.len() {
        spans.push(Span::raw(chars[pos..].iter().collect::<String>()));
    }

    Line::from(spans)
}

/// Render the editable source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    // `lines()` drops a trailing empty line, which is where the cursor sits
    // after Enter.
    let lines: Vec<&str> = source_code.split('\n').collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Keep the last line (the edit point) in view
    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num_str = format!("{:4} ", idx + 1);
            let mut spans = vec![Span::styled(
                line_num_str,
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_line(line).spans);

            if is_focused && idx + 1 == total_lines {
                spans.push(Span::styled(
                    " ",
                    Style::default()
                        .bg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_keeps_all_text() {
        let line = highlight_line("  let x  += 5; @");
        assert_eq!(texts(&line).concat(), "  let x  += 5; @");
        assert_eq!(
            texts(&line),
            ["  ", "let", " ", "x", "  ", "+=", " ", "5", ";", " ", "@"]
        );
    }

    #[test]
    fn test_highlight_trailing_whitespace() {
        let line = highlight_line("x\t ");
        assert_eq!(texts(&line), ["x", "\t "]);
    }

    #[test]
    fn test_nul_ends_highlighting_for_its_line() {
        let line = highlight_line("a\0b");
        assert_eq!(texts(&line), ["a", "\0b"]);
    }

    #[test]
    fn test_keyword_style() {
        let line = highlight_line("return");
        assert_eq!(line.spans[0].style, token_style(TokenKind::Return));
    }
}
