//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Editable source text, highlighted with the real lexer
//! - [`tokens`]: Token stream with kinds, literals and positions
//! - [`program`]: Parsed statements and parser diagnostics
//! - [`status`]: Status bar with keybindings and parse summary
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area, the data to draw and a mutable scroll offset.

pub mod program;
pub mod source;
pub mod status;
pub mod tokens;

// Re-export render functions for convenience
pub use program::render_program_pane;
pub use source::render_source_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tokens::render_tokens_pane;
