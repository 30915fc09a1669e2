//! Copy, cut and paste inside the text control, mirrored to the system
//! clipboard when one is reachable.

use super::*;

impl<'a> App<'a> {
    /// Copies the selection into the textarea's yank buffer and the system clipboard.
    pub(super) fn copy_selection(&mut self) {
        if self.textarea.selection_range().is_none() {
            return;
        }
        self.textarea.copy();
        self.mirror_yank();
    }

    /// Cuts the selection. Returns true when the buffer changed.
    pub(super) fn cut_selection(&mut self) -> bool {
        let changed = self.textarea.cut();
        if changed {
            self.mirror_yank();
        }
        changed
    }

    fn mirror_yank(&self) {
        let text = self.textarea.yank_text();
        if let Ok(mut clip) = arboard::Clipboard::new() {
            if let Err(e) = clip.set_text(text) {
                tracing::debug!(error = %e, "system clipboard rejected text");
            }
        }
    }

    /// Reads text from the system clipboard, falling back to the last text
    /// yanked inside the editor.
    pub(super) fn paste_from_clipboard(&self) -> Option<String> {
        arboard::Clipboard::new()
            .ok()
            .and_then(|mut clip| clip.get_text().ok())
            .or_else(|| {
                let yank = self.textarea.yank_text();
                (!yank.is_empty()).then_some(yank)
            })
    }
}
