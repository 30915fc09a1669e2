//! User decision surfaces: the unsaved-changes prompt, file pickers and
//! notices. Every call blocks until the user answers; cancellation comes back
//! as a value, never as a pending state.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Save,
    Discard,
    Cancel,
}

/// What a file picker is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickRequest<'a> {
    pub title: &'a str,
    /// Directory the picker starts in.
    pub directory: Option<&'a Path>,
    /// Extension (without the dot) suggested for new files.
    pub extension: Option<&'a str>,
}

/// Something the user should be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved(PathBuf),
    Exported(PathBuf),
    /// Converter export finished; carries the generated file.
    ConverterExported(PathBuf),
    Copied,
    ConverterMissing,
    About,
    Error(String),
}

pub const ABOUT_TEXT: &str = "A simple accessible Markdown editor which works well for screen reader users.

Write markdown in the source view, check the HTML view, import other document \
formats and export HTML with pandoc.";

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Saved(_) => "Saved",
            Notice::Exported(_) | Notice::ConverterExported(_) => "Success",
            Notice::Copied => "Copied",
            Notice::ConverterMissing => "Pandoc Not Found",
            Notice::About => "About Markdown Editor",
            Notice::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Saved(path) => format!("Saved {}", path.display()),
            Notice::Exported(path) => format!("Exported to {}", path.display()),
            Notice::ConverterExported(path) => {
                format!("Conversion successful. Output saved to {}", path.display())
            }
            Notice::Copied => "HTML copied to clipboard".to_string(),
            Notice::ConverterMissing => "Pandoc is not installed or not found in PATH. \
                 Please install pandoc to use this feature."
                .to_string(),
            Notice::About => ABOUT_TEXT.to_string(),
            Notice::Error(msg) => msg.clone(),
        }
    }

    /// Notices that need acknowledging rather than a passing status line.
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Notice::ConverterMissing
                | Notice::About
                | Notice::Error(_)
                | Notice::ConverterExported(_)
        )
    }
}

pub trait Surfaces {
    fn confirm_unsaved(&mut self) -> Decision;
    fn pick_open(&mut self, request: &PickRequest<'_>) -> Option<PathBuf>;
    fn pick_save(&mut self, request: &PickRequest<'_>) -> Option<PathBuf>;
    fn notify(&mut self, notice: Notice);
}

/// Surfaces that answer from prepared queues and record everything asked.
/// Used for headless runs and tests; an exhausted queue answers Cancel.
#[derive(Debug, Default)]
pub struct ScriptedSurfaces {
    pub decisions: VecDeque<Decision>,
    pub open_paths: VecDeque<PathBuf>,
    pub save_paths: VecDeque<PathBuf>,
    pub notices: Vec<Notice>,
    pub confirmations_shown: usize,
    pub open_pickers_shown: usize,
    pub save_pickers_shown: usize,
}

impl ScriptedSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decide(mut self, decision: Decision) -> Self {
        self.decisions.push_back(decision);
        self
    }

    pub fn open_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_paths.push_back(path.into());
        self
    }

    pub fn save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_paths.push_back(path.into());
        self
    }

    pub fn pickers_shown(&self) -> usize {
        self.open_pickers_shown + self.save_pickers_shown
    }
}

impl Surfaces for ScriptedSurfaces {
    fn confirm_unsaved(&mut self) -> Decision {
        self.confirmations_shown += 1;
        self.decisions.pop_front().unwrap_or(Decision::Cancel)
    }

    fn pick_open(&mut self, _request: &PickRequest<'_>) -> Option<PathBuf> {
        self.open_pickers_shown += 1;
        self.open_paths.pop_front()
    }

    fn pick_save(&mut self, _request: &PickRequest<'_>) -> Option<PathBuf> {
        self.save_pickers_shown += 1;
        self.save_paths.pop_front()
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
