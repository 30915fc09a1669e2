//! [`Surfaces`] on the terminal: each prompt takes over the screen and runs
//! its own small event loop until it has an answer.

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::components::dialog::{self, InputStep, PathInput};
use crate::surfaces::{Decision, Notice, PickRequest, Surfaces};

pub struct TerminalSurfaces<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
}

impl<'t, B: Backend> TerminalSurfaces<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>) -> Self {
        Self { terminal }
    }

    /// Blocks for the next key press.
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }

    /// Redraws `draw` until `answer` maps a key to a value.
    fn ask<T>(
        &mut self,
        mut draw: impl FnMut(&mut ratatui::Frame),
        mut answer: impl FnMut(&KeyEvent) -> Option<T>,
    ) -> io::Result<T> {
        loop {
            self.terminal.draw(&mut draw)?;
            let key = self.next_key()?;
            if let Some(value) = answer(&key) {
                return Ok(value);
            }
        }
    }

    fn read_path(&mut self, title: &str, input: &mut PathInput, hint: &str) -> io::Result<Option<String>> {
        loop {
            self.terminal
                .draw(|f| dialog::render_path_input(f, title, input, hint))?;
            let key = self.next_key()?;
            match input.handle_key(&key) {
                InputStep::Continue => {}
                InputStep::Submit(text) => return Ok(Some(text)),
                InputStep::Cancel => return Ok(None),
            }
        }
    }

    fn try_pick_open(&mut self, request: &PickRequest<'_>) -> io::Result<Option<PathBuf>> {
        let mut input = PathInput::starting_in(request.directory);
        loop {
            let Some(text) = self.read_path(request.title, &mut input, "Enter: open   Esc: cancel")? else {
                return Ok(None);
            };
            let path = dialog::expand_home(&text);
            if path.is_file() {
                return Ok(Some(path));
            }
            input.error = Some(format!("No such file: {}", path.display()));
        }
    }

    fn try_pick_save(&mut self, request: &PickRequest<'_>) -> io::Result<Option<PathBuf>> {
        let mut input = PathInput::starting_in(request.directory);
        loop {
            let Some(text) = self.read_path(request.title, &mut input, "Enter: save   Esc: cancel")? else {
                return Ok(None);
            };
            let path = match dialog::resolve_save_path(&text, request.extension) {
                Ok(path) => path,
                Err(msg) => {
                    input.error = Some(msg);
                    continue;
                }
            };
            if !path.exists() {
                return Ok(Some(path));
            }
            let question = format!("{} already exists. Replace it?", path.display());
            let replace = self.ask(
                |f| dialog::render_yes_no(f, "Confirm Save", &question),
                dialog::yes_no_for_key,
            )?;
            if replace {
                return Ok(Some(path));
            }
        }
    }
}

// A terminal that stops answering can't show a prompt; treat it as the
// user backing out so nothing gets discarded.
impl<B: Backend> Surfaces for TerminalSurfaces<'_, B> {
    fn confirm_unsaved(&mut self) -> Decision {
        self.ask(dialog::render_confirm, dialog::decision_for_key)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "prompt failed");
                Decision::Cancel
            })
    }

    fn pick_open(&mut self, request: &PickRequest<'_>) -> Option<PathBuf> {
        self.try_pick_open(request).unwrap_or_else(|e| {
            tracing::error!(error = %e, "open picker failed");
            None
        })
    }

    fn pick_save(&mut self, request: &PickRequest<'_>) -> Option<PathBuf> {
        self.try_pick_save(request).unwrap_or_else(|e| {
            tracing::error!(error = %e, "save picker failed");
            None
        })
    }

    /// Passing notices are left to the status bar; the rest wait for a key.
    fn notify(&mut self, notice: Notice) {
        if !notice.is_modal() {
            return;
        }
        if let Err(e) = self.ask(|f| dialog::render_notice(f, &notice), |_| Some(())) {
            tracing::error!(error = %e, "notice could not be shown");
        }
    }
}
