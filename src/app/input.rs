//! Input handling: command keys, editor keys, HTML view scrolling, mouse
//! wheel and paste.

use super::*;

impl<'a> App<'a> {
    /// Handles bracketed paste events. Only the source view takes text.
    pub(super) fn handle_paste(&mut self, text: String) {
        if self.view() == View::Source && self.textarea.insert_str(text) {
            self.record_edit();
        }
    }

    // ─── Key handling ────────────────────────────────────────────────────

    /// Command keys first, then Esc-as-back, then the active view's handler.
    pub(super) fn handle_key(&mut self, key: KeyEvent, ui: &mut dyn Surfaces) {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return;
        }

        if let Some(command) = Command::from_key(&key) {
            self.run_command(command, ui);
            return;
        }

        // Esc: return to the source view
        if key.code == KeyCode::Esc && key.modifiers.is_empty() {
            if self.view() == View::Rendered {
                self.run_command(Command::ViewSource, ui);
            }
            return;
        }

        match self.controller.focus() {
            Focus::TextEditor => self.handle_editor_key(key),
            Focus::Preview => self.handle_preview_key(key),
        }
    }

    /// Editor key handler. Intercepts standard keybindings (Ctrl+Z, Ctrl+C, etc.)
    /// BEFORE passing to tui-textarea, which has non-standard defaults:
    ///   tui-textarea: Ctrl+U=undo, Ctrl+Y=paste, Ctrl+V=PageDown, Ctrl+A=line-start
    ///   We remap:     Ctrl+Z=undo, Ctrl+Y=redo,  Ctrl+V=paste,    Ctrl+A=select-all
    fn handle_editor_key(&mut self, key: KeyEvent) {
        let changed = match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('z')) => self.textarea.undo(),
            (KeyModifiers::CONTROL, KeyCode::Char('y')) => self.textarea.redo(),
            (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.textarea.select_all();
                false
            }
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.copy_selection();
                false
            }
            (KeyModifiers::CONTROL, KeyCode::Char('x')) => self.cut_selection(),
            (KeyModifiers::CONTROL, KeyCode::Char('v')) => match self.paste_from_clipboard() {
                Some(text) => self.textarea.insert_str(text),
                None => false,
            },
            // Everything else: tui-textarea's built-in handling (arrows,
            // Enter, Backspace, Delete, Home, End, word navigation, ...)
            _ => self.textarea.input(Input::from(key)),
        };
        if changed {
            self.record_edit();
        }
    }

    /// HTML view key handler: scrolling only.
    fn handle_preview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.preview.scroll_up(1),
            KeyCode::Down => self.preview.scroll_down(1, self.viewport_height),
            KeyCode::PageUp => self.preview.page_up(self.viewport_height),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.preview.page_down(self.viewport_height)
            }
            KeyCode::Home => self.preview.scroll_offset = 0,
            KeyCode::End => self.preview.scroll_to_end(self.viewport_height),
            _ => {}
        }
    }

    // ─── Mouse handling ──────────────────────────────────────────────────

    /// Wheel scrolling in both views.
    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        match (mouse.kind, self.view()) {
            (MouseEventKind::ScrollUp, View::Source) => {
                self.textarea.scroll((-(SCROLL_LINES as i16), 0));
            }
            (MouseEventKind::ScrollDown, View::Source) => {
                self.textarea.scroll((SCROLL_LINES as i16, 0));
            }
            (MouseEventKind::ScrollUp, View::Rendered) => self.preview.scroll_up(SCROLL_LINES),
            (MouseEventKind::ScrollDown, View::Rendered) => {
                self.preview.scroll_down(SCROLL_LINES, self.viewport_height)
            }
            _ => {}
        }
    }
}
