//! Unit tests for the App module: command keys, editing sync, view
//! switching, HTML view scrolling and status messages.

use super::*;
use crate::clipboard::MemoryClipboard;
use crate::markdown::Markdown;
use crate::pandoc::Pandoc;
use crate::surfaces::ScriptedSurfaces;
use tempfile::TempDir;

// ─── Helpers ─────────────────────────────────────────────────────

fn app() -> App<'static> {
    let controller = SessionController::new(
        Box::new(Markdown),
        Box::new(Pandoc::new("/nonexistent/pandoc-for-tests")),
        Box::new(MemoryClipboard::default()),
    );
    App::new(controller)
}

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_key(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn type_text(app: &mut App, ui: &mut ScriptedSurfaces, text: &str) {
    for ch in text.chars() {
        let code = if ch == '\n' { KeyCode::Enter } else { KeyCode::Char(ch) };
        app.handle_event(key_event(code), ui);
    }
}

// ─── Editing ─────────────────────────────────────────────────────

#[test]
fn typing_updates_document_and_marks_modified() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    type_text(&mut app, &mut ui, "# Hi\nthere");
    assert_eq!(app.controller.document().text(), "# Hi\nthere");
    assert!(app.controller.document().is_modified());
}

#[test]
fn cursor_movement_does_not_mark_modified() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    app.handle_event(key_event(KeyCode::Left), &mut ui);
    app.handle_event(key_event(KeyCode::Down), &mut ui);
    assert!(!app.controller.document().is_modified());
}

#[test]
fn undo_is_an_edit() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    type_text(&mut app, &mut ui, "ab");
    app.handle_event(ctrl_key('z'), &mut ui);
    assert_eq!(app.controller.document().text(), app.textarea.lines().join("\n"));
    assert!(app.controller.document().is_modified());
}

#[test]
fn paste_inserts_in_source_view_only() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    app.handle_event(Event::Paste("pasted".into()), &mut ui);
    assert_eq!(app.controller.document().text(), "pasted");

    app.handle_event(key_event(KeyCode::F(4)), &mut ui);
    app.handle_event(Event::Paste(" more".into()), &mut ui);
    assert_eq!(app.controller.document().text(), "pasted");
}

// ─── Views ───────────────────────────────────────────────────────

#[test]
fn f4_toggles_and_renders() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    type_text(&mut app, &mut ui, "*x*");
    app.handle_event(key_event(KeyCode::F(4)), &mut ui);
    assert_eq!(app.view(), View::Rendered);
    assert!(app.controller.html().contains("<em>x</em>"));
    app.handle_event(key_event(KeyCode::F(4)), &mut ui);
    assert_eq!(app.view(), View::Source);
}

#[test]
fn esc_returns_to_source_from_rendered() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    app.handle_event(key_event(KeyCode::F(4)), &mut ui);
    app.handle_event(key_event(KeyCode::Esc), &mut ui);
    assert_eq!(app.view(), View::Source);
    assert!(!app.should_quit);
}

#[test]
fn typing_in_rendered_view_does_not_edit() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    app.handle_event(key_event(KeyCode::F(4)), &mut ui);
    type_text(&mut app, &mut ui, "abc");
    assert_eq!(app.controller.document().text(), "");
    assert!(!app.controller.document().is_modified());
}

#[test]
fn entering_rendered_resets_scroll() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    app.preview.scroll_offset = 7;
    app.handle_event(key_event(KeyCode::F(4)), &mut ui);
    assert_eq!(app.preview.scroll_offset, 0);
}

#[test]
fn preview_keys_scroll() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    app.handle_event(key_event(KeyCode::F(4)), &mut ui);
    app.preview.content_height = 50;
    app.viewport_height = 10;
    app.handle_event(key_event(KeyCode::Down), &mut ui);
    assert_eq!(app.preview.scroll_offset, 1);
    app.handle_event(key_event(KeyCode::End), &mut ui);
    assert_eq!(app.preview.scroll_offset, 40);
    app.handle_event(key_event(KeyCode::Home), &mut ui);
    assert_eq!(app.preview.scroll_offset, 0);
}

// ─── Commands ────────────────────────────────────────────────────

#[test]
fn ctrl_q_on_clean_document_quits_without_prompt() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    app.handle_event(ctrl_key('q'), &mut ui);
    assert!(app.should_quit);
    assert_eq!(ui.confirmations_shown, 0);
}

#[test]
fn ctrl_q_cancelled_keeps_running() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new().decide(Decision::Cancel);
    type_text(&mut app, &mut ui, "draft");
    app.handle_event(ctrl_key('q'), &mut ui);
    assert!(!app.should_quit);
    assert_eq!(app.status_message, "Cancelled");
    assert_eq!(app.controller.document().text(), "draft");
}

#[test]
fn new_document_rebuilds_textarea() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new().decide(Decision::Discard);
    type_text(&mut app, &mut ui, "old text");
    app.handle_event(ctrl_key('n'), &mut ui);
    assert_eq!(app.textarea.lines(), [String::new()]);
    assert!(!app.controller.document().is_modified());
}

#[test]
fn open_loads_file_into_textarea() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.md");
    std::fs::write(&path, "line one\nline two").unwrap();

    let mut app = app();
    let mut ui = ScriptedSurfaces::new().open_path(&path);
    app.handle_event(ctrl_key('o'), &mut ui);
    assert_eq!(app.textarea.lines(), ["line one", "line two"]);
    assert_eq!(app.controller.title(), "doc.md | Markdown Editor");
}

#[test]
fn save_shows_status_message() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.md");

    let mut app = app();
    let mut ui = ScriptedSurfaces::new().save_path(&path);
    type_text(&mut app, &mut ui, "content");
    app.handle_event(ctrl_key('s'), &mut ui);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    assert!(app.status_message.starts_with("Saved"), "got {}", app.status_message);
}

#[test]
fn import_without_converter_shows_notice() {
    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    app.handle_event(
        Event::Key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::ALT)),
        &mut ui,
    );
    assert_eq!(ui.notices, vec![Notice::ConverterMissing]);
    assert_eq!(ui.pickers_shown(), 0);
}

#[test]
fn startup_opens_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("start.md");
    std::fs::write(&path, "# Start").unwrap();

    let mut app = app();
    let mut ui = ScriptedSurfaces::new();
    let config = Config {
        open: Some(path),
        ..Config::default()
    };
    app.startup(&config, &mut ui);
    assert_eq!(app.textarea.lines(), ["# Start"]);
    assert!(!app.controller.document().is_modified());
}

// ─── Tick / timers ───────────────────────────────────────────────

#[test]
fn status_clears_after_duration() {
    let mut app = app();
    app.set_status("hello");
    app.status_time = Some(Instant::now() - STATUS_DURATION);
    app.tick();
    assert!(app.status_message.is_empty());
}

#[test]
fn terminal_failure_reports_unsaved_changes() {
    let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "hang-up");
    let mut app = app();
    assert!(!app.report_lost_changes(&err));

    let mut ui = ScriptedSurfaces::new();
    type_text(&mut app, &mut ui, "unsaved");
    assert!(app.report_lost_changes(&err));
}
