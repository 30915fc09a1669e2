use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;
use crate::view::View;

pub fn render(frame: &mut Frame, area: Rect, title: &str, modified: bool, active: View) {
    let left_spans = render_title(title, modified);

    // Right side: view tabs
    let mut right_spans: Vec<Span> = Vec::new();
    for view in [View::Source, View::Rendered] {
        let label = format!(" {} ", view.label());
        if view == active {
            right_spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme::WHITE)
                    .bg(theme::ACTIVE_TAB)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            right_spans.push(Span::styled(
                label,
                Style::default().fg(theme::INACTIVE_TAB).bg(theme::BAR_BG),
            ));
        }
    }

    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(right_spans.iter().map(|s| s.width() as u16).sum()),
    ])
    .split(area);

    // Fill background
    let bg = Paragraph::new("").style(theme::header_style());
    frame.render_widget(bg, area);

    let left = Paragraph::new(Line::from(left_spans));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(right_spans));
    frame.render_widget(right, chunks[1]);
}

fn render_title<'a>(title: &str, modified: bool) -> Vec<Span<'a>> {
    let mut spans = vec![Span::styled(format!("  {}", title), theme::header_style())];
    if modified {
        spans.push(Span::styled(
            " \u{2022}",
            Style::default().fg(theme::WARNING).bg(theme::BAR_BG),
        ));
    }
    spans
}
