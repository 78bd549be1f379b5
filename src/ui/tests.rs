use super::*;
use crate::app::{Message, Model, Pane, update};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::path::PathBuf;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    Terminal::new(backend).unwrap()
}

fn create_test_model(text: &str) -> Model {
    Model::new(Some(PathBuf::from("test.md")), text, (80, 24))
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

#[test]
fn test_render_shows_both_pane_titles() {
    let mut model = create_test_model("# Hello\n\nworld");
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("Editor"), "editor pane title missing");
    assert!(content.contains("Preview"), "preview pane title missing");
}

#[test]
fn test_render_editor_shows_buffer_text_with_line_numbers() {
    let mut model = create_test_model("alpha\nbeta");
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("alpha"));
    assert!(content.contains("beta"));
    assert!(content.contains("1 alpha"), "gutter line number missing");
}

#[test]
fn test_render_preview_shows_rendered_heading() {
    let mut model = create_test_model("# Hello");
    model.refresh_preview();
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    // The heading appears twice: raw in the editor, rendered in the preview.
    let content = buffer_text(&terminal);
    assert!(content.matches("# Hello").count() >= 2);
}

#[test]
fn test_render_empty_buffer_shows_placeholder_preview() {
    let mut model = create_test_model("");
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let content = buffer_text(&terminal);
    assert!(
        content.contains("empty preview"),
        "placeholder missing for empty buffer"
    );
}

#[test]
fn test_render_without_preview_pane() {
    let model = create_test_model("# Hello");
    let mut model = update(model, Message::TogglePreview);
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("Editor"));
    assert!(!content.contains("Preview"));
}

#[test]
fn test_status_bar_shows_mode_and_position() {
    let mut model = create_test_model("hello");
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("EDIT"));
    assert!(content.contains("test.md"));
    assert!(content.contains("Ln 1, Col 1"));
}

#[test]
fn test_status_bar_shows_modified_indicator() {
    let model = create_test_model("hello");
    let mut model = update(model, Message::InsertChar('!'));
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    assert!(buffer_text(&terminal).contains("[modified]"));
}

#[test]
fn test_status_bar_in_preview_focus_shows_scroll_info() {
    let mut model = create_test_model("# Hello\n\nworld");
    model.focus = Pane::Preview;
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("PREVIEW"));
    assert!(content.contains('%'));
}

#[test]
fn test_help_overlay_renders_bindings() {
    let model = create_test_model("hello");
    let mut model = update(model, Message::ToggleHelp);
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("Help"));
    assert!(content.contains("Ctrl-s"));
}

#[test]
fn test_render_long_document_respects_editor_scroll() {
    let text = (1..=100)
        .map(|i| format!("line number {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let model = create_test_model(&text);
    // Hide the preview so only the editor's visible window is on screen.
    let mut model = update(model, Message::TogglePreview);
    model.editor_scroll_offset = 50;
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("line number 51"));
    assert!(!content.contains("line number 1 "));
}

#[test]
fn test_pane_areas_split_adds_up() {
    let area = Rect::new(0, 0, 80, 24);
    let (editor, preview) = pane_areas(area, true);
    let preview = preview.unwrap();
    assert_eq!(editor.width + preview.width, 80);
    assert_eq!(editor.height, 23, "status bar row reserved");
    assert_eq!(preview.height, 23);
}

#[test]
fn test_pane_areas_without_preview_uses_full_width() {
    let area = Rect::new(0, 0, 80, 24);
    let (editor, preview) = pane_areas(area, false);
    assert!(preview.is_none());
    assert_eq!(editor.width, 80);
}

#[test]
fn test_preview_content_width_narrower_when_split() {
    let split = preview_content_width(80, true);
    let full = preview_content_width(80, false);
    assert!(split < full);
    assert!(split >= 1);
}

#[test]
fn test_pane_content_height_reserves_chrome() {
    assert_eq!(pane_content_height(24), 21); // status bar + borders
    assert_eq!(pane_content_height(3), 1);
    assert_eq!(pane_content_height(0), 1);
}

#[test]
fn test_line_number_width_scales() {
    assert_eq!(line_number_width(5), 1);
    assert_eq!(line_number_width(42), 2);
    assert_eq!(line_number_width(999), 3);
    assert_eq!(line_number_width(1_000), 4);
    assert_eq!(line_number_width(200_000), 6);
}
