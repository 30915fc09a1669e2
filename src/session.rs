//! The session controller: sequences user operations against the document,
//! guarding everything that would discard unsaved changes behind the
//! Save / Discard / Cancel prompt.
//!
//! Every operation is all-or-nothing. Failures are turned into notices here
//! and never leave the document, cache or view half-updated.

use std::path::{Path, PathBuf};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::document::Document;
use crate::error::AmeError;
use crate::markdown::{shell, Markdown, MarkdownRenderer};
use crate::pandoc::{Converter, HtmlOptions, Pandoc};
use crate::render_cache::RenderCache;
use crate::surfaces::{Decision, Notice, PickRequest, Surfaces};
use crate::textio;
use crate::view::{Focus, Transition, View, ViewCoordinator};

/// How an operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user backed out at a prompt or picker.
    Cancelled,
    /// The converter is not installed.
    Unavailable,
    /// An I/O or conversion error was reported to the user.
    Failed,
    /// The session should end.
    Exit,
}

/// Everything the open session owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub document: Document,
    pub cache: RenderCache,
    pub view: ViewCoordinator,
    /// Directory pickers start in. Survives New, like a file dialog would.
    pub last_directory: Option<PathBuf>,
    pub finished: bool,
}

pub struct SessionController {
    session: Session,
    renderer: Box<dyn MarkdownRenderer>,
    converter: Box<dyn Converter>,
    clipboard: Box<dyn ClipboardSink>,
}

impl SessionController {
    pub fn new(
        renderer: Box<dyn MarkdownRenderer>,
        converter: Box<dyn Converter>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            session: Session::default(),
            renderer,
            converter,
            clipboard,
        }
    }

    /// Built-in renderer, pandoc from the config, system clipboard.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(Markdown),
            Box::new(Pandoc::new(&config.pandoc)),
            Box::new(SystemClipboard),
        )
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn document(&self) -> &Document {
        &self.session.document
    }

    pub fn view(&self) -> View {
        self.session.view.active()
    }

    pub fn html(&self) -> &str {
        self.session.cache.html()
    }

    pub fn is_finished(&self) -> bool {
        self.session.finished
    }

    /// "name | Markdown Editor"
    pub fn title(&self) -> String {
        format!("{} | Markdown Editor", self.session.document.display_name())
    }

    // ─── Editing and views ───────────────────────────────────────────────

    /// Records a change made in the text control.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.session.document.edit(text);
        self.session.cache.invalidate();
    }

    pub fn show_source(&mut self) -> Transition {
        self.switch_view(View::Source)
    }

    pub fn show_rendered(&mut self) -> Transition {
        self.switch_view(View::Rendered)
    }

    pub fn toggle_view(&mut self) -> Transition {
        let Session {
            document,
            cache,
            view,
            ..
        } = &mut self.session;
        view.toggle(cache, self.renderer.as_ref(), document)
    }

    /// The control that receives keys in the active view.
    pub fn focus(&self) -> Focus {
        self.session.view.focus()
    }

    fn switch_view(&mut self, target: View) -> Transition {
        let Session {
            document,
            cache,
            view,
            ..
        } = &mut self.session;
        view.switch_to(target, cache, self.renderer.as_ref(), document)
    }

    // ─── Gate ────────────────────────────────────────────────────────────

    /// Runs the unsaved-changes prompt. Returns true when the caller may
    /// discard the current document.
    fn confirm_discard(&mut self, ui: &mut dyn Surfaces) -> bool {
        if !self.session.document.is_modified() {
            return true;
        }
        let decision = ui.confirm_unsaved();
        tracing::debug!(?decision, "unsaved changes prompt answered");
        match decision {
            Decision::Save => self.save(ui) == Outcome::Completed,
            Decision::Discard => true,
            Decision::Cancel => false,
        }
    }

    // ─── Gated operations ────────────────────────────────────────────────

    pub fn new_document(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        if !self.confirm_discard(ui) {
            return Outcome::Cancelled;
        }
        self.session.document.reset();
        self.session.cache.clear();
        self.show_source();
        tracing::info!("new document");
        Outcome::Completed
    }

    /// Asks for a file and opens it.
    pub fn open(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        if !self.confirm_discard(ui) {
            return Outcome::Cancelled;
        }
        let Some(path) = ui.pick_open(&self.pick_request("Open", None)) else {
            return Outcome::Cancelled;
        };
        self.load_file(path, ui)
    }

    /// Opens a known file, e.g. one named on the command line.
    pub fn open_file(&mut self, path: PathBuf, ui: &mut dyn Surfaces) -> Outcome {
        if !self.confirm_discard(ui) {
            return Outcome::Cancelled;
        }
        self.load_file(path, ui)
    }

    fn load_file(&mut self, path: PathBuf, ui: &mut dyn Surfaces) -> Outcome {
        let text = match textio::read_file(&path) {
            Ok(text) => text,
            Err(e) => return self.fail(e, ui),
        };
        self.remember_directory(&path);
        tracing::info!(path = %path.display(), "opened");
        self.session.document.load(text, Some(path));
        self.show_source();
        Outcome::Completed
    }

    /// Asks for a document in any converter-supported format and loads its
    /// markdown translation as an untitled document.
    pub fn import(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        if !self.converter_ready(ui) {
            return Outcome::Unavailable;
        }
        if !self.confirm_discard(ui) {
            return Outcome::Cancelled;
        }
        let Some(path) = ui.pick_open(&self.pick_request("Import", None)) else {
            return Outcome::Cancelled;
        };
        self.convert_and_load(&path, ui)
    }

    pub fn import_file(&mut self, path: &Path, ui: &mut dyn Surfaces) -> Outcome {
        if !self.converter_ready(ui) {
            return Outcome::Unavailable;
        }
        if !self.confirm_discard(ui) {
            return Outcome::Cancelled;
        }
        self.convert_and_load(path, ui)
    }

    fn convert_and_load(&mut self, path: &Path, ui: &mut dyn Surfaces) -> Outcome {
        let text = match self.converter.to_markdown(path) {
            Ok(text) => text,
            Err(e) => return self.fail(e.into(), ui),
        };
        self.remember_directory(path);
        tracing::info!(source = %path.display(), "imported");
        self.session.document.load(text, None);
        self.show_source();
        Outcome::Completed
    }

    pub fn exit(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        if !self.confirm_discard(ui) {
            return Outcome::Cancelled;
        }
        self.session.finished = true;
        Outcome::Exit
    }

    // ─── Saving ──────────────────────────────────────────────────────────

    /// Saves to the document's path, or asks for one when untitled.
    pub fn save(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        match self.session.document.path().map(Path::to_path_buf) {
            Some(path) => self.write_to(path, ui),
            None => self.save_as(ui),
        }
    }

    pub fn save_as(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        let Some(path) = ui.pick_save(&self.pick_request("Save", Some("md"))) else {
            return Outcome::Cancelled;
        };
        self.write_to(path, ui)
    }

    fn write_to(&mut self, path: PathBuf, ui: &mut dyn Surfaces) -> Outcome {
        if let Err(e) = textio::write_file(&path, self.session.document.text()) {
            return self.fail(e, ui);
        }
        tracing::info!(path = %path.display(), "saved");
        self.remember_directory(&path);
        self.session.document.mark_saved(path.clone());
        ui.notify(Notice::Saved(path));
        Outcome::Completed
    }

    // ─── Non-destructive outputs ─────────────────────────────────────────

    /// Renders the buffer into the minimal HTML document and writes it to a
    /// user-chosen file.
    pub fn export(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        let body = self.renderer.render(self.session.document.text());
        let Some(path) = ui.pick_save(&self.pick_request("Export HTML", Some("html"))) else {
            return Outcome::Cancelled;
        };
        if let Err(e) = textio::write_file(&path, &shell::wrap(&body)) {
            return self.fail(e, ui);
        }
        self.session.cache.store(body, &self.session.document);
        tracing::info!(path = %path.display(), "exported html");
        ui.notify(Notice::Exported(path));
        Outcome::Completed
    }

    /// Saves, then has the converter write a standalone HTML file with math
    /// support next to the saved markdown.
    pub fn export_with_converter(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        if !self.converter_ready(ui) {
            return Outcome::Unavailable;
        }
        let saved = self.save(ui);
        if saved != Outcome::Completed {
            return saved;
        }
        let Some(source) = self.session.document.path().map(Path::to_path_buf) else {
            return Outcome::Cancelled;
        };
        let target = source.with_extension("html");
        if let Err(e) = self
            .converter
            .to_html_file(&source, &target, HtmlOptions::default())
        {
            return self.fail(e.into(), ui);
        }
        tracing::info!(path = %target.display(), "converter export finished");
        ui.notify(Notice::ConverterExported(target));
        Outcome::Completed
    }

    /// Puts the rendered HTML on the clipboard and shows it.
    pub fn copy_html(&mut self, ui: &mut dyn Surfaces) -> Outcome {
        let html = self.renderer.render(self.session.document.text());
        if let Err(e) = self.clipboard.set_text(&html) {
            return self.fail(e, ui);
        }
        self.session.cache.store(html, &self.session.document);
        self.show_rendered();
        ui.notify(Notice::Copied);
        Outcome::Completed
    }

    // ─── Helpers ─────────────────────────────────────────────────────────

    fn converter_ready(&self, ui: &mut dyn Surfaces) -> bool {
        if self.converter.is_available() {
            return true;
        }
        tracing::warn!("converter is not available");
        ui.notify(Notice::ConverterMissing);
        false
    }

    fn fail(&self, err: AmeError, ui: &mut dyn Surfaces) -> Outcome {
        tracing::error!(error = %err, "operation failed");
        ui.notify(Notice::Error(err.to_string()));
        Outcome::Failed
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            self.session.last_directory = Some(dir.to_path_buf());
        }
    }

    fn pick_request<'a>(&'a self, title: &'a str, extension: Option<&'a str>) -> PickRequest<'a> {
        PickRequest {
            title,
            directory: self
                .session
                .document
                .directory()
                .or(self.session.last_directory.as_deref()),
            extension,
        }
    }
}
