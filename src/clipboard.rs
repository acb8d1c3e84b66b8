//! System clipboard access behind the `ClipboardWriter` seam.

use crate::error::ClipboardError;
use arboard::Clipboard;

/// Contract for the clipboard collaborator.
pub trait ClipboardWriter {
    /// Place `text` on the system clipboard.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// arboard-backed production clipboard.
///
/// The OS handle is constructed lazily on first write: opening a clipboard
/// can fail on headless hosts, and that failure belongs to the copy action,
/// which reports it and lets the session continue.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.handle.is_none() {
            let clipboard = Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Probe whether a system clipboard can be opened at all.
///
/// Used by preflight to warn early; the result is advisory only.
pub fn probe() -> Result<(), ClipboardError> {
    Clipboard::new()
        .map(drop)
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))
}
