//! Token stream pane rendering

use crate::parser::Token;
use crate::ui::theme::{border_style, token_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// One row of the token list: `line:col  KIND  literal`
pub fn token_row(token: &Token) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>7} ", token.location.to_string()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<10}", token.kind.as_str()), token_style(token.kind)),
        Span::styled(
            format!(" {}", token.literal),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ])
}

/// Render the token pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", tokens.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let total_items = tokens.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = tokens
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|tok| ListItem::new(token_row(tok)))
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
