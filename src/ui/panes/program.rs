//! Program pane rendering: parsed statements followed by diagnostics

use crate::parser::{Program, Statement};
use crate::ui::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Everything the program pane shows, as lines.
pub fn program_lines(program: &Program, errors: &[String]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if program.statements.is_empty() {
        lines.push(Line::styled(
            "(no statements)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    for (idx, stmt) in program.statements.iter().enumerate() {
        let kind = match stmt {
            Statement::Let(_) => "Let",
            Statement::Return(_) => "Return",
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>3} ", idx),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!("{:<7}", kind),
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("@{} ", stmt.token().location),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(stmt.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    lines.push(Line::raw(""));

    if errors.is_empty() {
        lines.push(Line::styled(
            "no diagnostics",
            Style::default().fg(DEFAULT_THEME.success),
        ));
    } else {
        lines.push(Line::styled(
            format!("{} diagnostic(s)", errors.len()),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ));
        for msg in errors {
            lines.push(Line::styled(
                format!("  {}", msg),
                Style::default().fg(DEFAULT_THEME.error),
            ));
        }
    }

    lines
}

/// Render the program pane
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Program,
    errors: &[String],
    strict: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = if strict {
        " Program (strict) "
    } else {
        " Program "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let lines = program_lines(program, errors);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
