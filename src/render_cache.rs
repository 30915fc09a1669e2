//! HTML last rendered from the document buffer.

use crate::document::Document;
use crate::markdown::MarkdownRenderer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderCache {
    html: String,
    /// Document revision the html was computed from. `None` = stale.
    valid_for: Option<u64>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.valid_for = None;
    }

    /// Re-renders the buffer. Always recomputes, even when the cache is still
    /// valid for the current revision; callers that want to skip redundant
    /// work can check [`RenderCache::is_valid_for`] first.
    pub fn ensure_fresh(&mut self, renderer: &dyn MarkdownRenderer, document: &Document) -> &str {
        let html = renderer.render(document.text());
        self.store(html, document);
        &self.html
    }

    /// Records html computed elsewhere for the document's current revision.
    pub fn store(&mut self, html: String, document: &Document) {
        self.html = html;
        self.valid_for = Some(document.revision());
    }

    pub fn clear(&mut self) {
        self.html.clear();
        self.valid_for = None;
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_valid_for(&self, document: &Document) -> bool {
        self.valid_for == Some(document.revision())
    }
}
