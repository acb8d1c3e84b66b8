//! Terminal user-interface building blocks.
//!
//! This module hosts the panel layout math, the line-prompt reader, the
//! spinner, and the screen-level renderer. The split keeps layout math,
//! input validation, and output styling decoupled from the session logic
//! that sequences them.

pub mod panel;
pub mod progress;
pub mod prompt;
pub mod renderer;
pub mod settings;
pub mod text;

pub use panel::{Panel, PanelRow};
pub use prompt::Prompter;
pub use renderer::Renderer;
