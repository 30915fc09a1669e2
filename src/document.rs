//! The single open document: markdown buffer, file path and modified flag.

use std::path::{Path, PathBuf};

/// Name shown for a document that has never been saved.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    buffer: String,
    path: Option<PathBuf>,
    modified: bool,
    /// Bumped by every mutation of the buffer; identifies a buffer version.
    revision: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffer wholesale. Used by open (with the file's path)
    /// and import (without one).
    pub fn load(&mut self, text: impl Into<String>, path: Option<PathBuf>) {
        self.buffer = text.into();
        self.path = path;
        self.modified = false;
        self.revision += 1;
    }

    /// Records a user edit. The document counts as modified even when the
    /// new text equals the old.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.modified = true;
        self.revision += 1;
    }

    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.modified = false;
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.path = None;
        self.modified = false;
        self.revision += 1;
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn directory(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
    }

    /// File name, or "Untitled".
    pub fn display_name(&self) -> &str {
        self.file_name().unwrap_or(UNTITLED)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
