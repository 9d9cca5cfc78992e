//! Main TUI application state and logic

use crate::parser::{Lexer, Parser, ParserOptions, Program, Token, TokenKind};
use crate::ui::panes::{self, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Program,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> program)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Program,
            FocusedPane::Program => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Program,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Program => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// The source buffer being edited
    pub source_code: String,

    /// Lexer and parser results for `source_code`
    pub tokens: Vec<Token>,
    pub program: Program,
    pub errors: Vec<String>,

    pub options: ParserOptions,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub program_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app over `source_code`, lexed and parsed immediately
    pub fn new(source_code: String, options: ParserOptions) -> Self {
        let mut app = App {
            source_code,
            tokens: Vec::new(),
            program: Program::new(),
            errors: Vec::new(),
            options,
            focused_pane: FocusedPane::Source,
            source_scroll: usize::MAX,
            tokens_scroll: 0,
            program_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        app.refresh();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Re-run the lexer and parser over the whole buffer
    pub fn refresh(&mut self) {
        self.tokens = Lexer::new(&self.source_code).tokenize();

        let mut parser = Parser::with_options(Lexer::new(&self.source_code), self.options);
        self.program = parser.parse_program();
        self.errors = parser.errors().to_vec();
    }

    pub fn illegal_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Illegal)
            .count()
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source. Right column: Tokens (top) | Program (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        panes::render_program_pane(
            frame,
            right_rows[1],
            &self.program,
            &self.errors,
            self.options.strict,
            self.focused_pane == FocusedPane::Program,
            &mut self.program_scroll,
        );

        let status = StatusRenderData {
            message: &self.status_message,
            token_count: self.tokens.len(),
            illegal_count: self.illegal_count(),
            statement_count: self.program.statements.len(),
            error_count: self.errors.len(),
            strict: self.options.strict,
        };
        panes::render_status_bar(frame, main_chunks[1], &status);
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('s') if ctrl => {
                self.options.strict = !self.options.strict;
                self.refresh();
                self.status_message = if self.options.strict {
                    "Strict mode on".to_string()
                } else {
                    "Strict mode off".to_string()
                };
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = (*scroll).saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = (*scroll).saturating_add(1);
            }
            KeyCode::Char(c) if !ctrl && self.focused_pane == FocusedPane::Source => {
                self.source_code.push(c);
                self.on_edit();
            }
            KeyCode::Enter if self.focused_pane == FocusedPane::Source => {
                self.source_code.push('\n');
                self.on_edit();
            }
            KeyCode::Backspace if self.focused_pane == FocusedPane::Source => {
                if self.source_code.pop().is_some() {
                    self.on_edit();
                }
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Program => &mut self.program_scroll,
        }
    }

    fn on_edit(&mut self) {
        self.refresh();
        // Follow the edit point and the newest tokens
        self.source_scroll = usize::MAX;
        self.tokens_scroll = usize::MAX;
        self.status_message = format!(
            "{} statement(s), {} diagnostic(s)",
            self.program.statements.len(),
            self.errors.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            app.handle_key_event(key(code));
        }
    }

    #[test]
    fn test_new_parses_initial_source() {
        let app = App::new("let x = 1;".to_string(), ParserOptions::default());
        assert_eq!(app.tokens.len(), 6);
        assert_eq!(app.program.statements.len(), 1);
        assert!(app.errors.is_empty());
    }

    #[test]
    fn test_typing_reparses() {
        let mut app = App::new(String::new(), ParserOptions::default());
        type_text(&mut app, "let a = 1;\nlet b = 2;");
        assert_eq!(app.source_code, "let a = 1;\nlet b = 2;");
        assert_eq!(app.program.statements.len(), 2);

        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.program.statements.len(), 1);
    }

    #[test]
    fn test_strict_toggle() {
        let mut app = App::new("let = 5;".to_string(), ParserOptions::default());
        assert!(app.errors.is_empty());

        app.handle_key_event(ctrl('s'));
        assert!(app.options.strict);
        assert_eq!(app.errors.len(), 1);

        app.handle_key_event(ctrl('s'));
        assert!(app.errors.is_empty());
    }

    #[test]
    fn test_typing_only_edits_source_pane() {
        let mut app = App::new(String::new(), ParserOptions::default());
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        type_text(&mut app, "x");
        assert!(app.source_code.is_empty());

        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.focused_pane, FocusedPane::Source);
    }

    #[test]
    fn test_illegal_count() {
        let app = App::new("@ # x".to_string(), ParserOptions::default());
        assert_eq!(app.illegal_count(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(String::new(), ParserOptions::default());
        app.handle_key_event(ctrl('c'));
        assert!(app.should_quit);

        let mut app = App::new(String::new(), ParserOptions::default());
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = FocusedPane::Source;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, FocusedPane::Source);
        assert_eq!(FocusedPane::Source.prev(), FocusedPane::Program);
    }
}
