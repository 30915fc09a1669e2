//! Read-only HTML view with line scrolling.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::theme;

#[derive(Debug, Default)]
pub struct PreviewState {
    pub scroll_offset: u16,
    pub content_height: u16,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16, viewport_height: u16) {
        let max = self.content_height.saturating_sub(viewport_height);
        self.scroll_offset = self.scroll_offset.saturating_add(amount).min(max);
    }

    pub fn page_up(&mut self, viewport_height: u16) {
        self.scroll_up(viewport_height.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self, viewport_height: u16) {
        self.scroll_down(viewport_height.saturating_sub(1).max(1), viewport_height);
    }

    pub fn scroll_to_end(&mut self, viewport_height: u16) {
        self.scroll_offset = self.content_height.saturating_sub(viewport_height);
    }
}

pub fn render(frame: &mut Frame, area: Rect, html: &str, state: &mut PreviewState) {
    let lines: Vec<Line> = html.lines().map(highlight_line).collect();
    state.content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    // Keep the offset in range after the html shrank
    let max = state.content_height.saturating_sub(area.height);
    state.scroll_offset = state.scroll_offset.min(max);

    let paragraph = Paragraph::new(lines)
        .style(theme::editor_style())
        .scroll((state.scroll_offset, 0));
    frame.render_widget(paragraph, area);

    if state.content_height > area.height {
        let mut scrollbar_state = ScrollbarState::new(max as usize)
            .position(state.scroll_offset as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

/// Splits a line of HTML into tag and text spans.
fn highlight_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find('<') {
        if start > 0 {
            spans.push(Span::raw(rest[..start].to_string()));
        }
        let end = rest[start..].find('>').map_or(rest.len(), |i| start + i + 1);
        spans.push(Span::styled(rest[start..end].to_string(), theme::tag_style()));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        spans.push(Span::raw(rest.to_string()));
    }
    Line::from(spans)
}
