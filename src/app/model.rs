use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::Document;
use crate::editor::EditorBuffer;
use crate::ui::viewport::Viewport;

/// Hash a byte slice for content comparison (disk conflict detection).
pub(super) fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Editor,
    Preview,
}

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The editor buffer
/// is the source of truth; the preview document is always derived from it
/// (see [`Model::refresh_preview`]).
pub struct Model {
    /// The editable text buffer (source of truth)
    pub buffer: EditorBuffer,
    /// Rendered markdown derived from the buffer
    pub preview: Document,
    /// Viewport managing the preview pane's scroll position
    pub viewport: Viewport,
    /// Scroll offset for the editor pane (first visible buffer line)
    pub editor_scroll_offset: usize,
    /// Path the buffer is bound to; `None` for an untitled buffer
    pub file_path: Option<PathBuf>,
    /// Pane that receives keyboard input
    pub focus: Pane,
    /// Whether the preview pane is shown
    pub preview_visible: bool,
    /// Whether file watching is enabled
    pub watch_enabled: bool,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Content hash of the file on disk at open / last save
    pub disk_hash: Option<u64>,
    /// Set after first save attempt onto an externally-modified file;
    /// allows the second save to overwrite
    pub save_confirmed: bool,
    /// Set after first quit attempt with unsaved changes; allows the
    /// second quit to proceed
    pub quit_confirmed: bool,
    /// Terminal size (cols, rows)
    pub terminal_size: (u16, u16),
    toast: Option<Toast>,
    /// The buffer changed since the preview was last derived
    preview_stale: bool,
    /// Re-align the preview with the cursor on the next refresh
    follow_cursor: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("focus", &self.focus)
            .field("preview_visible", &self.preview_visible)
            .field("watch_enabled", &self.watch_enabled)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model for `text`, optionally bound to a file path.
    pub fn new(file_path: Option<PathBuf>, text: &str, terminal_size: (u16, u16)) -> Self {
        let preview_width =
            crate::ui::preview_content_width(terminal_size.0, true);
        let content_height = crate::ui::pane_content_height(terminal_size.1);
        let mut model = Self {
            buffer: EditorBuffer::from_text(text),
            preview: Document::empty(),
            viewport: Viewport::new(preview_width, content_height, 0),
            editor_scroll_offset: 0,
            file_path,
            focus: Pane::Editor,
            preview_visible: true,
            watch_enabled: false,
            help_visible: false,
            config_global_path: None,
            config_local_path: None,
            should_quit: false,
            disk_hash: None,
            save_confirmed: false,
            quit_confirmed: false,
            terminal_size,
            toast: None,
            preview_stale: true,
            follow_cursor: false,
        };
        model.refresh_preview();
        model
    }

    /// Mark the preview as out of date with the buffer.
    ///
    /// `follow` additionally re-aligns the preview viewport with the
    /// cursor once the preview is re-derived.
    pub(super) const fn invalidate_preview(&mut self, follow: bool) {
        self.preview_stale = true;
        if follow {
            self.follow_cursor = true;
        }
    }

    /// Whether the preview needs re-deriving before the next draw.
    pub const fn preview_is_stale(&self) -> bool {
        self.preview_stale
    }

    /// Re-derive the preview from the buffer if it is stale.
    ///
    /// This is the only place the preview document is replaced, which
    /// keeps it a pure function of the buffer text.
    pub fn refresh_preview(&mut self) {
        if !self.preview_stale {
            return;
        }
        let _scope = crate::perf::scope("preview.refresh");
        let text = self.buffer.text();
        match Document::parse_with_layout(&text, self.preview_layout_width()) {
            Ok(document) => {
                self.preview = document;
                self.viewport.set_total_lines(self.preview.line_count());
                self.preview_stale = false;
            }
            Err(err) => {
                crate::perf::log_event("preview.refresh.error", format!("{err}"));
            }
        }
        if self.follow_cursor {
            self.follow_cursor = false;
            self.sync_preview_to_cursor();
        }
    }

    /// Scroll the preview so the block containing the cursor is in view.
    pub fn sync_preview_to_cursor(&mut self) {
        let cursor_line = self.buffer.cursor().line;
        if let Some(rendered) = self.preview.rendered_line_for_source_line(cursor_line) {
            self.viewport.follow_line(rendered);
        } else if self.preview.line_count() > 0 {
            // No anchors (e.g. all-blank document): fall back to a
            // proportional mapping.
            let source_total = self.buffer.line_count().max(1);
            let target =
                (cursor_line * self.preview.line_count().saturating_sub(1)) / source_total;
            self.viewport.follow_line(target);
        }
    }

    /// Width the preview content is wrapped to, given the current
    /// terminal size and pane visibility.
    pub fn preview_layout_width(&self) -> u16 {
        crate::ui::preview_content_width(self.terminal_size.0, self.preview_visible)
    }

    /// Rows of buffer text visible in the editor pane.
    pub fn editor_visible_height(&self) -> usize {
        crate::ui::pane_content_height(self.terminal_size.1) as usize
    }

    /// Keep the editor cursor line inside the editor pane.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let cursor_line = self.buffer.cursor().line;
        let visible_height = self.editor_visible_height();
        if visible_height == 0 {
            self.editor_scroll_offset = cursor_line;
            return;
        }

        if cursor_line < self.editor_scroll_offset {
            self.editor_scroll_offset = cursor_line;
        } else if cursor_line >= self.editor_scroll_offset + visible_height {
            self.editor_scroll_offset = cursor_line + 1 - visible_height;
        }
    }

    /// Apply a terminal resize, re-deriving layout-dependent state.
    pub(super) fn apply_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.viewport.resize(
            crate::ui::preview_content_width(width, self.preview_visible),
            crate::ui::pane_content_height(height),
        );
        self.ensure_cursor_visible();
        self.invalidate_preview(false);
    }

    /// Whether the buffer has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// Display name for the buffer.
    pub fn display_name(&self) -> String {
        self.file_path.as_ref().map_or_else(
            || "untitled".to_string(),
            |p| {
                p.file_name()
                    .map_or_else(|| p.display().to_string(), |n| n.to_string_lossy().to_string())
            },
        )
    }

    /// Hash the contents of the bound file on disk, `None` if unreadable.
    pub fn file_disk_hash(&self) -> Option<u64> {
        let path = self.file_path.as_ref()?;
        let bytes = std::fs::read(path).ok()?;
        Some(hash_bytes(&bytes))
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Default exists so the event loop can std::mem::take the model around
// the pure update function.
impl Default for Model {
    fn default() -> Self {
        Self {
            buffer: EditorBuffer::empty(),
            preview: Document::empty(),
            viewport: Viewport::new(80, 24, 0),
            editor_scroll_offset: 0,
            file_path: None,
            focus: Pane::Editor,
            preview_visible: true,
            watch_enabled: false,
            help_visible: false,
            config_global_path: None,
            config_local_path: None,
            should_quit: false,
            disk_hash: None,
            save_confirmed: false,
            quit_confirmed: false,
            terminal_size: (80, 24),
            toast: None,
            preview_stale: false,
            follow_cursor: false,
        }
    }
}
