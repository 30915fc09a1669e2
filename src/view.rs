//! Which of the two views is showing, and where input focus goes.

use crate::document::Document;
use crate::markdown::MarkdownRenderer;
use crate::render_cache::RenderCache;

/// The two top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// The markdown text buffer.
    #[default]
    Source,
    /// The HTML preview.
    Rendered,
}

impl View {
    pub fn other(self) -> Self {
        match self {
            View::Source => View::Rendered,
            View::Rendered => View::Source,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Source => "MARKDOWN",
            View::Rendered => "HTML",
        }
    }
}

/// The control holding input focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    TextEditor,
    Preview,
}

/// Result of a view switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Already in the requested view; nothing ran.
    Unchanged,
    Entered(View),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCoordinator {
    active: View,
    focus: Focus,
}

impl ViewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Switches to `target`. Entering the rendered view re-renders the buffer
    /// first; entering the source view never renders.
    pub fn switch_to(
        &mut self,
        target: View,
        cache: &mut RenderCache,
        renderer: &dyn MarkdownRenderer,
        document: &Document,
    ) -> Transition {
        if self.active == target {
            return Transition::Unchanged;
        }
        if target == View::Rendered {
            cache.ensure_fresh(renderer, document);
        }
        self.active = target;
        self.focus = match target {
            View::Source => Focus::TextEditor,
            View::Rendered => Focus::Preview,
        };
        tracing::debug!(view = ?target, "view switched");
        Transition::Entered(target)
    }

    pub fn toggle(
        &mut self,
        cache: &mut RenderCache,
        renderer: &dyn MarkdownRenderer,
        document: &Document,
    ) -> Transition {
        self.switch_to(self.active.other(), cache, renderer, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::Markdown;

    fn setup(text: &str) -> (ViewCoordinator, RenderCache, Document) {
        let mut doc = Document::new();
        doc.edit(text);
        (ViewCoordinator::new(), RenderCache::new(), doc)
    }

    #[test]
    fn starts_in_source_with_editor_focus() {
        let view = ViewCoordinator::new();
        assert_eq!(view.active(), View::Source);
        assert_eq!(view.focus(), Focus::TextEditor);
    }

    #[test]
    fn entering_rendered_renders_and_moves_focus() {
        let (mut view, mut cache, doc) = setup("*x*");
        let t = view.switch_to(View::Rendered, &mut cache, &Markdown, &doc);
        assert_eq!(t, Transition::Entered(View::Rendered));
        assert_eq!(view.focus(), Focus::Preview);
        assert!(cache.html().contains("<em>x</em>"));
    }

    #[test]
    fn entering_source_does_not_render() {
        let (mut view, mut cache, mut doc) = setup("one");
        view.switch_to(View::Rendered, &mut cache, &Markdown, &doc);
        doc.edit("two");
        view.switch_to(View::Source, &mut cache, &Markdown, &doc);
        assert_eq!(view.focus(), Focus::TextEditor);
        assert!(cache.html().contains("one"));
        assert!(!cache.is_valid_for(&doc));
    }

    #[test]
    fn self_transition_is_noop() {
        let (mut view, mut cache, doc) = setup("a");
        assert_eq!(
            view.switch_to(View::Source, &mut cache, &Markdown, &doc),
            Transition::Unchanged
        );
        assert_eq!(cache.html(), "");
    }

    #[test]
    fn toggle_alternates() {
        let (mut view, mut cache, doc) = setup("a");
        view.toggle(&mut cache, &Markdown, &doc);
        assert_eq!(view.active(), View::Rendered);
        view.toggle(&mut cache, &Markdown, &doc);
        assert_eq!(view.active(), View::Source);
    }
}
