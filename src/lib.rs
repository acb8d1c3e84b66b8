//! Artsy — an interactive ASCII-art generator for the terminal.
//!
//! This crate drives a menu-based terminal session: the user types text,
//! picks one of a fixed catalog of figlet fonts, previews the rendered
//! block-letter art in a bordered panel, and can copy it to the system
//! clipboard. A "surprise me" flow composes a randomized sample from a small
//! catalog of decorative glyph rows plus one rendered exclamation word.
//!
//! # Quick start
//!
//! ```no_run
//! use artsy::clipboard::SystemClipboard;
//! use artsy::figlet::FigletRenderer;
//! use artsy::session::Session;
//! use artsy::tui::Renderer;
//!
//! let figlet = FigletRenderer::new().unwrap();
//! let mut session = Session::new(
//!     figlet,
//!     SystemClipboard::new(),
//!     std::io::stdin().lock(),
//!     Renderer::new(true),
//! );
//! session.run().unwrap();
//! ```

pub mod build_info;
pub mod catalog;
pub mod clipboard;
pub mod error;
pub mod figlet;
pub mod preflight;
pub mod session;
pub mod tui;
