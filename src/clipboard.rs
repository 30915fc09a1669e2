//! System clipboard sink.

use crate::error::{AmeError, Result};

/// Accepts text for system-wide copy.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// arboard-backed clipboard. The handle is created on demand: it is not
/// `Send` and creating one is cheap.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clip =
            arboard::Clipboard::new().map_err(|e| AmeError::Clipboard(e.to_string()))?;
        clip.set_text(text.to_string())
            .map_err(|e| AmeError::Clipboard(e.to_string()))
    }
}

/// Keeps the last copied text in memory. Stands in for the system clipboard
/// when none is reachable (headless sessions, tests).
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_text() {
        let mut clip = MemoryClipboard::default();
        clip.set_text("<p>one</p>").unwrap();
        clip.set_text("<p>two</p>").unwrap();
        assert_eq!(clip.contents.as_deref(), Some("<p>two</p>"));
    }
}
