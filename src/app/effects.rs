//! Side effects triggered by messages after the pure update runs.

use crate::app::model::hash_bytes;
use crate::app::{App, Message, Model, ToastLevel};
use crate::editor::SaveError;

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::Save => match Self::save_buffer(model) {
                Ok(()) => {
                    model.save_confirmed = false;
                    model.show_toast(
                        ToastLevel::Info,
                        format!("Saved {}", model.display_name()),
                    );
                }
                Err(SaveError::DiskConflict) => {
                    model.save_confirmed = true;
                    model.show_toast(
                        ToastLevel::Warning,
                        "File changed on disk! Press Ctrl+S again to overwrite",
                    );
                }
                Err(err) => {
                    model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
                    crate::perf::log_event("save.error", format!("{err}"));
                }
            },
            Message::FileChanged => {
                if model.is_dirty() {
                    // Keep the user's edits; saving now will hit the
                    // conflict path until they overwrite deliberately.
                    model.show_toast(
                        ToastLevel::Warning,
                        "File changed on disk (unsaved edits kept)",
                    );
                    return;
                }
                match Self::reload_buffer(model) {
                    Ok(()) => {}
                    Err(err) => {
                        model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
                        crate::perf::log_event("reload.error", format!("{err}"));
                    }
                }
            }
            Message::ForceReload => {
                if model.is_dirty() {
                    model.show_toast(
                        ToastLevel::Warning,
                        "Unsaved changes! Save with Ctrl+S before reloading",
                    );
                    return;
                }
                match Self::reload_buffer(model) {
                    Ok(()) => model.show_toast(ToastLevel::Info, "Reloaded"),
                    Err(err) => {
                        model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
                        crate::perf::log_event("reload.error", format!("{err}"));
                    }
                }
            }
            Message::ToggleWatch => {
                // The watcher itself is owned by the event loop; here we
                // only surface the state change.
                if model.watch_enabled {
                    model.show_toast(ToastLevel::Info, "Watching file changes");
                } else {
                    model.show_toast(ToastLevel::Info, "Watch disabled");
                }
            }
            _ => {}
        }
    }

    /// Write the buffer to its bound file.
    pub(super) fn save_buffer(model: &mut Model) -> Result<(), SaveError> {
        let Some(path) = model.file_path.clone() else {
            return Err(SaveError::NoPath);
        };

        // Refuse to clobber external edits until the user confirms.
        if !model.save_confirmed
            && let (Some(expected), Some(current)) = (model.disk_hash, model.file_disk_hash())
            && expected != current
        {
            return Err(SaveError::DiskConflict);
        }

        let text = model.buffer.text();
        std::fs::write(&path, &text)?;
        model.buffer.mark_clean();
        model.disk_hash = Some(hash_bytes(text.as_bytes()));
        Ok(())
    }

    /// Replace the buffer with the file's current on-disk content.
    pub(super) fn reload_buffer(model: &mut Model) -> std::io::Result<()> {
        let Some(path) = model.file_path.clone() else {
            return Ok(());
        };
        let bytes = std::fs::read(&path)?;
        let text = String::from_utf8(bytes)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        model.disk_hash = Some(hash_bytes(text.as_bytes()));
        model.buffer.replace_text(&text);
        model.ensure_cursor_visible();
        model.invalidate_preview(true);
        model.refresh_preview();
        Ok(())
    }
}
