use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

/// Where the user is, in the terms of the active view.
pub enum Position {
    /// Cursor in the text buffer, 1-based.
    Cursor { line: usize, col: usize },
    /// First visible line of the HTML view, 1-based, and the line total.
    Scroll { top: usize, total: usize },
}

impl Position {
    fn describe(&self) -> String {
        match self {
            Position::Cursor { line, col } => format!("Ln {}, Col {}", line, col),
            Position::Scroll { top, total } => format!("HTML line {} of {}", top, total),
        }
    }
}

pub struct StatusInfo<'a> {
    pub position: Position,
    pub message: &'a str,
    pub word_count: usize,
    pub modified: bool,
}

pub fn render(frame: &mut Frame, area: Rect, info: StatusInfo) {
    let bg = Paragraph::new("").style(theme::status_style());
    frame.render_widget(bg, area);

    let [left_area, center_area, right_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let left = Paragraph::new(Line::from(Span::styled(
        format!("  {}", info.position.describe()),
        theme::status_style(),
    )));
    frame.render_widget(left, left_area);

    if !info.message.is_empty() {
        let center = Paragraph::new(Line::from(Span::styled(
            info.message.to_string(),
            theme::status_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(center, center_area);
    }

    let save_status = if info.modified { "Modified" } else { "Saved" };
    let right = Paragraph::new(Line::from(Span::styled(
        format!("{} words | {}  ", info.word_count, save_status),
        theme::status_style(),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, right_area);
}
