use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::{Input, TextArea};

use crate::commands::Command;
use crate::components::{editor, header, preview, status};
use crate::config::Config;
use crate::session::{Outcome, SessionController};
use crate::surfaces::{Decision, Notice, PickRequest, Surfaces};
use crate::theme;
use crate::view::{Focus, View};

pub use terminal::TerminalSurfaces;

/// How long status bar messages stay visible before auto-clearing.
const STATUS_DURATION: Duration = Duration::from_secs(3);

/// Lines to scroll per mouse wheel tick in the HTML view.
const SCROLL_LINES: u16 = 3;

/// Maximum width for the UI content area. Wider terminals get centered, capped layout.
const MAX_WIDTH: u16 = 120;

const WELCOME: &str = "F1: help | F4: switch view | Ctrl+S: save | Ctrl+Q: quit";

pub struct App<'a> {
    pub controller: SessionController,
    /// Text control for the source view. Mirrors the document buffer.
    pub textarea: TextArea<'a>,
    /// Document revision the textarea was last synced with.
    synced_revision: u64,
    pub preview: preview::PreviewState,
    pub should_quit: bool,

    // --- Status bar ---
    pub status_message: String,
    pub status_time: Option<Instant>,

    // --- Internal tracking ---
    viewport_height: u16,
}

impl<'a> App<'a> {
    pub fn new(controller: SessionController) -> Self {
        let textarea = editor::textarea_for(controller.document().text());
        let synced_revision = controller.document().revision();
        Self {
            controller,
            textarea,
            synced_revision,
            preview: preview::PreviewState::new(),
            should_quit: false,
            status_message: WELCOME.to_string(),
            status_time: Some(Instant::now()),
            viewport_height: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(SessionController::from_config(config))
    }

    /// Opens or imports the file named on the command line.
    pub fn startup(&mut self, config: &Config, ui: &mut dyn Surfaces) {
        if let Some(path) = &config.import {
            self.run_with(ui, |c, ui| c.import_file(path, ui));
        } else if let Some(path) = &config.open {
            self.run_with(ui, |c, ui| c.open_file(path.clone(), ui));
        }
    }

    pub fn view(&self) -> View {
        self.controller.view()
    }

    /// Returns the full editor content as a single string.
    fn textarea_content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    // ─── Tick / timers ───────────────────────────────────────────────────

    /// Called every 100ms from the main loop. Handles timer-based state cleanup.
    pub fn tick(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() >= STATUS_DURATION {
                self.status_message.clear();
                self.status_time = None;
            }
        }
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Top-level event handler. Decisions the session needs (unsaved
    /// changes, file names) are asked through `ui`.
    pub fn handle_event(&mut self, event: Event, ui: &mut dyn Surfaces) {
        match event {
            Event::Key(key) => self.handle_key(key, ui),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Bracketed paste: terminal sends entire clipboard as one event
            // (enabled via EnableBracketedPaste in main.rs)
            Event::Paste(text) => self.handle_paste(text),
            _ => {}
        }
    }

    /// Runs a table command and brings the editor back in line with the
    /// document afterwards.
    pub fn run_command(&mut self, command: Command, ui: &mut dyn Surfaces) -> Outcome {
        self.run_with(ui, |c, ui| command.run(c, ui))
    }

    fn run_with(
        &mut self,
        ui: &mut dyn Surfaces,
        op: impl FnOnce(&mut SessionController, &mut dyn Surfaces) -> Outcome,
    ) -> Outcome {
        let before = self.view();
        let mut tap = StatusTap {
            inner: ui,
            status: None,
        };
        let outcome = op(&mut self.controller, &mut tap);
        if let Some(msg) = tap.status {
            self.set_status(&msg);
        }
        if outcome == Outcome::Cancelled {
            self.set_status("Cancelled");
        }
        if outcome == Outcome::Exit {
            self.should_quit = true;
        }
        if self.view() == View::Rendered && before != View::Rendered {
            self.preview.scroll_offset = 0;
        }
        self.sync_from_document();
        outcome
    }

    /// Rebuilds the text control when the buffer was replaced underneath it
    /// (open, import, new).
    fn sync_from_document(&mut self) {
        let document = self.controller.document();
        if document.revision() != self.synced_revision {
            self.textarea = editor::textarea_for(document.text());
            self.synced_revision = document.revision();
        }
    }

    /// Pushes the text control's content into the document.
    fn record_edit(&mut self) {
        let text = self.textarea_content();
        self.controller.edit(text);
        self.synced_revision = self.controller.document().revision();
    }

    /// Counts the total number of words in the editor.
    fn word_count(&self) -> usize {
        self.textarea
            .lines()
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum()
    }

    /// Logs that the session ended on a terminal failure. Returns true when
    /// unsaved changes were lost with it.
    pub fn report_lost_changes(&self, err: &std::io::Error) -> bool {
        let document = self.controller.document();
        if document.is_modified() {
            tracing::warn!(
                error = %err,
                document = document.display_name(),
                "terminal lost, unsaved changes were dropped"
            );
            return true;
        }
        tracing::error!(error = %err, "terminal lost");
        false
    }

    /// Shows a temporary message in the status bar.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = msg.to_string();
        self.status_time = Some(Instant::now());
    }
}

/// Forwards to the real surfaces, keeping passing notices for the status bar.
struct StatusTap<'u> {
    inner: &'u mut dyn Surfaces,
    status: Option<String>,
}

impl Surfaces for StatusTap<'_> {
    fn confirm_unsaved(&mut self) -> Decision {
        self.inner.confirm_unsaved()
    }

    fn pick_open(&mut self, request: &PickRequest<'_>) -> Option<std::path::PathBuf> {
        self.inner.pick_open(request)
    }

    fn pick_save(&mut self, request: &PickRequest<'_>) -> Option<std::path::PathBuf> {
        self.inner.pick_save(request)
    }

    fn notify(&mut self, notice: Notice) {
        if !notice.is_modal() {
            self.status = Some(notice.message());
        }
        self.inner.notify(notice);
    }
}

mod clipboard;
mod input;
mod render;
mod terminal;

#[cfg(test)]
mod tests;
