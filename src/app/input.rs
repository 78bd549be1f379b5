use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Message, Model, Pane};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) => Some(Message::InsertText(text.clone())),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize.queue", format!("width={w} height={h}"));
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Bindings that work regardless of pane focus.
        match key.code {
            KeyCode::Char('q') if ctrl => return Some(Message::Quit),
            KeyCode::Char('s') if ctrl => return Some(Message::Save),
            KeyCode::Char('p') if ctrl => return Some(Message::TogglePreview),
            KeyCode::Char('r') if ctrl => return Some(Message::ForceReload),
            KeyCode::Tab => return Some(Message::SwitchFocus),
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            _ => {}
        }

        match model.focus {
            Pane::Editor => Self::handle_editor_key(key, ctrl),
            Pane::Preview => Self::handle_preview_key(key, model),
        }
    }

    /// Editor-pane bindings: plain characters insert, so commands need a
    /// modifier or a function key.
    fn handle_editor_key(key: KeyEvent, ctrl: bool) -> Option<Message> {
        use crate::editor::Direction;

        match key.code {
            KeyCode::Left if ctrl => Some(Message::MoveWordLeft),
            KeyCode::Right if ctrl => Some(Message::MoveWordRight),
            KeyCode::Home if ctrl => Some(Message::MoveToBufferStart),
            KeyCode::End if ctrl => Some(Message::MoveToBufferEnd),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::PageUp => Some(Message::EditorPageUp),
            KeyCode::PageDown => Some(Message::EditorPageDown),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Enter => Some(Message::InsertNewline),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::InsertChar(c))
            }
            _ => None,
        }
    }

    /// Preview-pane bindings: pager-style keys, like a read-only viewer.
    fn handle_preview_key(key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if model.viewport.can_scroll_down() {
                    Some(Message::PreviewScrollDown(1))
                } else {
                    None
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if model.viewport.can_scroll_up() {
                    Some(Message::PreviewScrollUp(1))
                } else {
                    None
                }
            }
            KeyCode::Char(' ') | KeyCode::PageDown => {
                if model.viewport.can_scroll_down() {
                    Some(Message::PreviewPageDown)
                } else {
                    None
                }
            }
            KeyCode::Char('b') | KeyCode::PageUp => {
                if model.viewport.can_scroll_up() {
                    Some(Message::PreviewPageUp)
                } else {
                    None
                }
            }
            KeyCode::Char('g') | KeyCode::Home => Some(Message::PreviewGoTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::PreviewGoBottom),
            KeyCode::Char('w') => Some(Message::ToggleWatch),
            KeyCode::Char('r') => Some(Message::ForceReload),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('e') | KeyCode::Esc => Some(Message::FocusEditor),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return None;
        }

        let area = Rect::new(0, 0, model.terminal_size.0, model.terminal_size.1);
        let (editor_area, preview_area) = crate::ui::pane_areas(area, model.preview_visible);
        let in_editor = point_in_rect(mouse.column, mouse.row, editor_area);
        let in_preview = preview_area
            .is_some_and(|rect| point_in_rect(mouse.column, mouse.row, rect));

        match mouse.kind {
            MouseEventKind::ScrollDown if in_preview => {
                if model.viewport.can_scroll_down() {
                    Some(Message::PreviewScrollDown(3))
                } else {
                    None
                }
            }
            MouseEventKind::ScrollUp if in_preview => {
                if model.viewport.can_scroll_up() {
                    Some(Message::PreviewScrollUp(3))
                } else {
                    None
                }
            }
            MouseEventKind::ScrollDown if in_editor => Some(Message::EditorScrollDown(3)),
            MouseEventKind::ScrollUp if in_editor => Some(Message::EditorScrollUp(3)),
            MouseEventKind::Down(_) if in_editor => {
                editor_position_for_click(model, editor_area, mouse.column, mouse.row)
                    .map(|(line, col)| Message::MoveTo(line, col))
            }
            _ => None,
        }
    }
}

fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Map a click inside the editor pane to a (line, col) buffer position.
fn editor_position_for_click(
    model: &Model,
    editor_area: Rect,
    col: u16,
    row: u16,
) -> Option<(usize, usize)> {
    // Inner content starts past the border and padding.
    let inner_x = editor_area.x + 2;
    let inner_y = editor_area.y + 1;
    if row < inner_y || col < inner_x {
        return None;
    }
    let rel_row = (row - inner_y) as usize;
    let line = model.editor_scroll_offset + rel_row;
    if line >= model.buffer.line_count() {
        return None;
    }

    let gutter = crate::ui::line_number_width(model.buffer.line_count()) as usize + 1;
    let rel_col = (col - inner_x) as usize;
    let text_col = rel_col.saturating_sub(gutter);
    Some((line, text_col))
}
