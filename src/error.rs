//! Unified error types for the generator.

use std::fmt;

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// Errors arising from figlet text rendering.
#[derive(Debug)]
pub enum RenderError {
    /// The requested font name did not resolve to a usable font.
    UnknownFont(String),
    /// A font file was found but could not be parsed.
    Font(String),
    /// The font loaded but could not render the given text.
    Unrenderable(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFont(name) => write!(f, "unknown font `{name}`"),
            Self::Font(msg) => write!(f, "font failed to load: {msg}"),
            Self::Unrenderable(text) => write!(f, "text could not be rendered: `{text}`"),
        }
    }
}

impl std::error::Error for RenderError {}

// ---------------------------------------------------------------------------
// ClipboardError
// ---------------------------------------------------------------------------

/// Errors from the system clipboard collaborator.
#[derive(Debug)]
pub enum ClipboardError {
    /// No clipboard mechanism is available on this host.
    Unavailable(String),
    /// The clipboard exists but the write failed.
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            Self::Write(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

// ---------------------------------------------------------------------------
// SessionError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the interactive session.
///
/// Clipboard failures never appear here: they are reported at the copy
/// action and the session keeps running.
#[derive(Debug)]
pub enum SessionError {
    /// Rendering failed even with the default fallback font.
    Render(RenderError),
    /// Terminal input/output failed (closed stdin, broken pipe).
    Io(std::io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "render: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<RenderError> for SessionError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_display() {
        assert_eq!(
            RenderError::UnknownFont("gothic".into()).to_string(),
            "unknown font `gothic`"
        );
        assert_eq!(
            RenderError::Font("bad header".into()).to_string(),
            "font failed to load: bad header"
        );
        assert_eq!(
            RenderError::Unrenderable("\u{7}".into()).to_string(),
            "text could not be rendered: `\u{7}`"
        );
    }

    #[test]
    fn clipboard_error_display() {
        assert_eq!(
            ClipboardError::Unavailable("no display".into()).to_string(),
            "clipboard unavailable: no display"
        );
        assert!(ClipboardError::Write("denied".into())
            .to_string()
            .contains("denied"));
    }

    #[test]
    fn session_error_from_render_error() {
        let e = SessionError::from(RenderError::UnknownFont("mini".into()));
        assert!(e.to_string().starts_with("render:"), "got: {e}");
    }

    #[test]
    fn session_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let e = SessionError::from(io_err);
        assert!(e.to_string().starts_with("io:"), "got: {e}");
        assert!(e.to_string().contains("stdin closed"));
    }
}
