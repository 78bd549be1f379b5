use crate::app::Model;
use crate::app::model::{Pane, ToastLevel};
use crate::editor::Direction;

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a string at the cursor (bracketed paste)
    InsertText(String),
    /// Split the line at the cursor (Enter)
    InsertNewline,
    /// Delete the character before the cursor (Backspace)
    DeleteBack,
    /// Delete the character at the cursor (Delete)
    DeleteForward,

    // Cursor movement
    /// Move the cursor one cell in a direction
    MoveCursor(Direction),
    /// Move to the beginning of the line (Home)
    MoveHome,
    /// Move to the end of the line (End)
    MoveEnd,
    /// Move one word left (Ctrl+Left)
    MoveWordLeft,
    /// Move one word right (Ctrl+Right)
    MoveWordRight,
    /// Move to the start of the buffer (Ctrl+Home)
    MoveToBufferStart,
    /// Move to the end of the buffer (Ctrl+End)
    MoveToBufferEnd,
    /// Move to an absolute position (mouse click)
    MoveTo(usize, usize),
    /// Move the cursor one editor page up
    EditorPageUp,
    /// Move the cursor one editor page down
    EditorPageDown,
    /// Scroll the editor pane without moving the cursor (mouse wheel)
    EditorScrollUp(usize),
    /// Scroll the editor pane without moving the cursor (mouse wheel)
    EditorScrollDown(usize),

    // Preview pane
    /// Scroll the preview up by n lines
    PreviewScrollUp(usize),
    /// Scroll the preview down by n lines
    PreviewScrollDown(usize),
    /// Scroll the preview up one page
    PreviewPageUp,
    /// Scroll the preview down one page
    PreviewPageDown,
    /// Go to the top of the preview
    PreviewGoTop,
    /// Go to the bottom of the preview
    PreviewGoBottom,
    /// Show or hide the preview pane
    TogglePreview,

    // Application
    /// Switch keyboard focus between panes
    SwitchFocus,
    /// Give the editor pane focus
    FocusEditor,
    /// Toggle the help overlay
    ToggleHelp,
    /// Hide the help overlay
    HideHelp,
    /// Toggle file watching
    ToggleWatch,
    /// Save the buffer to its file
    Save,
    /// File changed externally
    FileChanged,
    /// Reload the buffer from disk
    ForceReload,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

impl Message {
    /// Whether this message mutates the buffer (and therefore the preview).
    const fn edits_buffer(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertText(_)
                | Self::InsertNewline
                | Self::DeleteBack
                | Self::DeleteForward
        )
    }

    /// Whether this message moves the editor cursor without editing.
    const fn moves_cursor(&self) -> bool {
        matches!(
            self,
            Self::MoveCursor(_)
                | Self::MoveHome
                | Self::MoveEnd
                | Self::MoveWordLeft
                | Self::MoveWordRight
                | Self::MoveToBufferStart
                | Self::MoveToBufferEnd
                | Self::MoveTo(_, _)
                | Self::EditorPageUp
                | Self::EditorPageDown
        )
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here. Side
/// effects (file I/O, watcher management) live in the effects layer.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Reset confirmation flags on any action other than the confirmed one.
    // Save preserves the quit flag so Ctrl+S can complete a pending quit.
    if !matches!(msg, Message::Quit | Message::Save) {
        model.quit_confirmed = false;
    }
    if !matches!(msg, Message::Save) {
        model.save_confirmed = false;
    }

    let edits = msg.edits_buffer();
    let moves = msg.moves_cursor();

    match msg {
        // Editing
        Message::InsertChar(ch) => {
            model.buffer.insert_char(ch);
        }
        Message::InsertText(text) => {
            model.buffer.insert_str(&text);
        }
        Message::InsertNewline => {
            model.buffer.split_line();
        }
        Message::DeleteBack => {
            model.buffer.delete_back();
        }
        Message::DeleteForward => {
            model.buffer.delete_forward();
        }

        // Cursor movement
        Message::MoveCursor(dir) => {
            model.buffer.move_cursor(dir);
        }
        Message::MoveHome => {
            model.buffer.move_home();
        }
        Message::MoveEnd => {
            model.buffer.move_end();
        }
        Message::MoveWordLeft => {
            model.buffer.move_word_left();
        }
        Message::MoveWordRight => {
            model.buffer.move_word_right();
        }
        Message::MoveToBufferStart => {
            model.buffer.move_to_start();
        }
        Message::MoveToBufferEnd => {
            model.buffer.move_to_end();
        }
        Message::MoveTo(line, col) => {
            model.buffer.move_to(line, col);
        }
        Message::EditorPageUp => {
            let page = model.editor_visible_height();
            let cursor = model.buffer.cursor();
            model.buffer.move_to(cursor.line.saturating_sub(page), cursor.col);
        }
        Message::EditorPageDown => {
            let page = model.editor_visible_height();
            let cursor = model.buffer.cursor();
            model.buffer.move_to(cursor.line + page, cursor.col);
        }
        Message::EditorScrollUp(n) => {
            model.editor_scroll_offset = model.editor_scroll_offset.saturating_sub(n);
        }
        Message::EditorScrollDown(n) => {
            let max = model.buffer.line_count().saturating_sub(1);
            model.editor_scroll_offset = (model.editor_scroll_offset + n).min(max);
        }

        // Preview pane
        Message::PreviewScrollUp(n) => {
            model.viewport.scroll_up(n);
        }
        Message::PreviewScrollDown(n) => {
            model.viewport.scroll_down(n);
        }
        Message::PreviewPageUp => {
            model.viewport.page_up();
        }
        Message::PreviewPageDown => {
            model.viewport.page_down();
        }
        Message::PreviewGoTop => {
            model.viewport.go_to_top();
        }
        Message::PreviewGoBottom => {
            model.viewport.go_to_bottom();
        }
        Message::TogglePreview => {
            model.preview_visible = !model.preview_visible;
            if !model.preview_visible && model.focus == Pane::Preview {
                model.focus = Pane::Editor;
            }
            // The wrap width changed with the pane split.
            let (width, height) = model.terminal_size;
            model.apply_resize(width, height);
        }

        // Application
        Message::SwitchFocus => {
            model.focus = match model.focus {
                Pane::Editor if model.preview_visible => Pane::Preview,
                _ => Pane::Editor,
            };
        }
        Message::FocusEditor => {
            model.focus = Pane::Editor;
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::ToggleWatch => {
            model.watch_enabled = !model.watch_enabled;
        }
        // Save/FileChanged/ForceReload: handled in effects (side effects)
        Message::Save | Message::FileChanged | Message::ForceReload => {}
        Message::Resize(width, height) => {
            model.apply_resize(width, height);
        }
        Message::Quit => {
            if model.is_dirty() && !model.quit_confirmed {
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes! Press Ctrl+Q again to quit, or Ctrl+S to save",
                );
                model.quit_confirmed = true;
            } else {
                model.should_quit = true;
            }
        }
    }

    if edits || moves {
        model.ensure_cursor_visible();
    }
    if edits {
        // The buffer changed: the preview must be re-derived from it.
        model.invalidate_preview(true);
    } else if moves && model.focus == Pane::Editor {
        model.sync_preview_to_cursor();
    }

    model
}
