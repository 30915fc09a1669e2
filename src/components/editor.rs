use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::theme;

/// Builds the text control for a buffer. An empty buffer still gets one line.
pub fn textarea_for(text: &str) -> TextArea<'static> {
    let lines: Vec<String> = if text.is_empty() {
        vec![String::new()]
    } else {
        text.split('\n').map(String::from).collect()
    };
    let mut textarea = TextArea::new(lines);
    configure_textarea(&mut textarea);
    textarea
}

pub fn configure_textarea(textarea: &mut TextArea) {
    // Cursor line highlighting
    textarea.set_cursor_line_style(theme::cursor_line_style());

    // Line numbers
    textarea.set_line_number_style(theme::line_number_style());

    // Editor area style
    textarea.set_style(theme::editor_style());

    // Cursor style
    textarea.set_cursor_style(
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
    );

    // Selection style
    textarea.set_selection_style(Style::default().bg(theme::SELECTION));

    // Tab = 4 spaces, markdown's code indent
    textarea.set_tab_length(4);

    // Hard tab to spaces
    textarea.set_hard_tab_indent(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_one_line() {
        let ta = textarea_for("");
        assert_eq!(ta.lines(), [String::new()]);
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let ta = textarea_for("# Title\n");
        assert_eq!(ta.lines().join("\n"), "# Title\n");
    }
}
