//! Terminal explorer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, source editing
//! - **[`panes`]** — stateless render functions for each visible pane (source,
//!   tokens, program, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the initial
//! source text and call [`App::run`] to start the event loop. Every edit
//! re-lexes and re-parses the whole buffer.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
