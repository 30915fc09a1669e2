//! Markdown to HTML conversion.

pub mod shell;

use pulldown_cmark::{html, Options, Parser};

/// Turns markdown source into an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// Built-in renderer with the extended syntax set: tables, footnotes,
/// definition lists, strikethrough and heading attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl Markdown {
    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_DEFINITION_LIST
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_HEADING_ATTRIBUTES
    }
}

impl MarkdownRenderer for Markdown {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Convenience wrapper around [`Markdown`].
pub fn to_html(markdown: &str) -> String {
    Markdown.render(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis() {
        assert_eq!(to_html("*x*"), "<p><em>x</em></p>\n");
        assert!(to_html("**x**").contains("<strong>x</strong>"));
    }

    #[test]
    fn empty_source_renders_nothing() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn tables() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"), "got: {}", html);
        assert!(html.contains("<td>1</td>"), "got: {}", html);
    }

    #[test]
    fn footnotes() {
        let html = to_html("Text[^1]\n\n[^1]: The note.\n");
        assert!(html.contains("footnote"), "got: {}", html);
        assert!(html.contains("The note."), "got: {}", html);
    }

    #[test]
    fn definition_lists() {
        let html = to_html("Term\n: Definition\n");
        assert!(html.contains("<dl>"), "got: {}", html);
        assert!(html.contains("<dt>Term</dt>"), "got: {}", html);
        assert!(html.contains("<dd>"), "got: {}", html);
    }

    #[test]
    fn heading_attributes() {
        let html = to_html("# Title {#top}\n");
        assert!(html.contains("id=\"top\""), "got: {}", html);
    }

    #[test]
    fn raw_html_passes_through() {
        let html = to_html("<div>kept</div>\n");
        assert!(html.contains("<div>kept</div>"));
    }
}
