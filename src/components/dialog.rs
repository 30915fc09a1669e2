//! Modal boxes: the unsaved-changes prompt, path entry and notices.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::commands::COMMANDS;
use crate::surfaces::{Decision, Notice};
use crate::theme;

const DIALOG_WIDTH: u16 = 64;

/// Maps a key press in the unsaved-changes prompt to an answer.
pub fn decision_for_key(key: &KeyEvent) -> Option<Decision> {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => Some(Decision::Save),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Decision::Discard),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => Some(Decision::Cancel),
        _ => None,
    }
}

/// Maps a key press in a yes/no question. `None` = keep waiting.
pub fn yes_no_for_key(key: &KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}

/// Result of feeding a key to a [`PathInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputStep {
    Continue,
    Submit(String),
    Cancel,
}

/// Single-line path entry.
#[derive(Debug, Clone, Default)]
pub struct PathInput {
    pub text: String,
    /// Cursor position in chars.
    pub cursor: usize,
    /// Shown under the input after a rejected submit.
    pub error: Option<String>,
}

impl PathInput {
    /// Starts with `directory` and a trailing separator.
    pub fn starting_in(directory: Option<&Path>) -> Self {
        let text = match directory {
            Some(dir) => {
                let mut s = dir.display().to_string();
                if !s.ends_with(MAIN_SEPARATOR) {
                    s.push(MAIN_SEPARATOR);
                }
                s
            }
            None => String::new(),
        };
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            error: None,
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> InputStep {
        let len = self.text.chars().count();
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => return InputStep::Cancel,
            (_, KeyCode::Enter) => {
                let trimmed = self.text.trim();
                if trimmed.is_empty() {
                    self.error = Some("Enter a file name".to_string());
                    return InputStep::Continue;
                }
                return InputStep::Submit(trimmed.to_string());
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.text.clear();
                self.cursor = 0;
            }
            (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
                let at = self.byte_index(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
            }
            (_, KeyCode::Backspace) if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
            }
            (_, KeyCode::Delete) if self.cursor < len => {
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
            }
            (_, KeyCode::Left) => self.cursor = self.cursor.saturating_sub(1),
            (_, KeyCode::Right) => self.cursor = (self.cursor + 1).min(len),
            (_, KeyCode::Home) => self.cursor = 0,
            (_, KeyCode::End) => self.cursor = len,
            _ => return InputStep::Continue,
        }
        self.error = None;
        InputStep::Continue
    }
}

/// Resolves what the user typed in a save picker: `~/` expands to the home
/// directory and a missing extension gets the suggested one. Input naming a
/// directory (trailing separator or an existing directory) is rejected with
/// the message to show.
pub fn resolve_save_path(input: &str, extension: Option<&str>) -> Result<PathBuf, String> {
    let path = expand_home(input);
    if input.ends_with(MAIN_SEPARATOR) || input.ends_with('/') || path.is_dir() {
        return Err(format!("{} is a directory; enter a file name", path.display()));
    }
    Ok(match extension {
        Some(ext) if path.extension().is_none() => path.with_extension(ext),
        _ => path,
    })
}

pub fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(input)
}

/// Centers a box of the given size inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn framed<'a>(title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::dialog_border_style())
        .title(Span::styled(format!(" {} ", title), theme::dialog_title_style()))
}

fn draw_box(frame: &mut Frame, title: &str, lines: Vec<Line>) {
    let height = lines.len() as u16 + 2;
    let area = centered(frame.area(), DIALOG_WIDTH, height);
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .block(framed(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_confirm(frame: &mut Frame) {
    let key = |k: &'static str| Span::styled(k, Style::default().add_modifier(Modifier::BOLD));
    draw_box(
        frame,
        "Save?",
        vec![
            Line::from(""),
            Line::from("  Recent change has not been saved."),
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                key("[S]"),
                Span::raw("ave   "),
                key("[D]"),
                Span::raw("iscard   "),
                key("[C]"),
                Span::raw("ancel"),
            ]),
        ],
    );
}

pub fn render_yes_no(frame: &mut Frame, title: &str, question: &str) {
    draw_box(
        frame,
        title,
        vec![
            Line::from(""),
            Line::from(format!("  {}", question)),
            Line::from(""),
            Line::from("  [Y]es   [N]o"),
        ],
    );
}

pub fn render_path_input(frame: &mut Frame, title: &str, input: &PathInput, hint: &str) {
    let split = input.byte_index(input.cursor);
    let (before, after) = input.text.split_at(split);
    let mut after_chars = after.chars();
    let under_cursor = after_chars.next().map_or(" ".to_string(), String::from);
    let rest: String = after_chars.collect();

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("  {}", before)),
            Span::styled(
                under_cursor,
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            ),
            Span::raw(rest),
        ]),
        Line::from(""),
    ];
    match &input.error {
        Some(err) => lines.push(Line::from(Span::styled(format!("  {}", err), theme::error_style()))),
        None => lines.push(Line::from(format!("  {}", hint))),
    }
    draw_box(frame, title, lines);
}

pub fn render_notice(frame: &mut Frame, notice: &Notice) {
    let mut lines = vec![Line::from("")];
    for text in notice.message().lines() {
        lines.push(Line::from(format!("  {}", text)));
    }
    if *notice == Notice::About {
        lines.push(Line::from(""));
        for spec in COMMANDS {
            let keys = spec.keys.first().map(|k| k.label()).unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", keys),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(spec.label),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from("  Press any key to continue"));
    draw_box(frame, notice.title(), lines);
}
