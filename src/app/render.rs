//! UI rendering: main frame layout, source and HTML views.

use super::*;

impl<'a> App<'a> {
    /// Runs one frame of the main loop: draw + tick.
    pub fn render_frame<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> std::io::Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        self.tick();
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let full = frame.area();

        // Fill entire frame background first (covers margins outside capped area)
        let bg = Paragraph::new("").style(theme::editor_style());
        frame.render_widget(bg, full);

        // Cap width and center horizontally
        let capped_width = full.width.min(MAX_WIDTH);
        let x_offset = (full.width - capped_width) / 2;
        let usable_area = Rect::new(x_offset, full.y, capped_width, full.height);

        let [header_area, top_rule, content_area, bottom_rule, status_area] =
            Layout::vertical([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Divider
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Divider
                Constraint::Length(1), // Status
            ])
            .areas(usable_area);

        self.viewport_height = content_area.height;

        let title = self.controller.title();
        let modified = self.controller.document().is_modified();
        header::render(frame, header_area, &title, modified, self.view());
        render_divider(frame, top_rule);

        match self.view() {
            View::Source => frame.render_widget(&self.textarea, content_area),
            View::Rendered => {
                preview::render(frame, content_area, self.controller.html(), &mut self.preview)
            }
        }

        render_divider(frame, bottom_rule);

        let position = match self.view() {
            View::Source => {
                let (row, col) = self.textarea.cursor();
                status::Position::Cursor {
                    line: row + 1,
                    col: col + 1,
                }
            }
            View::Rendered => status::Position::Scroll {
                top: self.preview.scroll_offset as usize + 1,
                total: self.preview.content_height as usize,
            },
        };
        status::render(
            frame,
            status_area,
            status::StatusInfo {
                position,
                message: &self.status_message,
                word_count: self.word_count(),
                modified,
            },
        );
    }
}

fn render_divider(frame: &mut Frame, area: Rect) {
    let rule = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::dialog_border_style());
    frame.render_widget(rule, area);
}
