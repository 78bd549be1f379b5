//! Viewport management for the preview pane.
//!
//! The [`Viewport`] tracks the visible slice of the rendered document and
//! owns all scroll operations, including `follow_line` which keeps the
//! preview aligned with the editor cursor.

use std::ops::Range;

/// Manages the visible portion of the rendered document.
///
/// # Example
///
/// ```
/// use mdpane::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24, 100);
/// assert_eq!(vp.visible_range(), 0..24);
///
/// vp.scroll_down(10);
/// assert_eq!(vp.visible_range(), 10..34);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport of `width` x `height` cells over a document
    /// of `total_lines` rendered lines.
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Get the viewport width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of lines in the document.
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Get the range of visible lines, clamped to the document bounds.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset;
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Get the scroll percentage (0-100).
    pub fn scroll_percent(&self) -> u8 {
        if self.total_lines == 0 {
            return 100;
        }

        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }

        // Percentage value always 0-100
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
        }
    }

    /// Check if we can scroll up.
    pub const fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    /// Check if we can scroll down.
    pub const fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Scroll up by n lines.
    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines.
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    /// Scroll up one page.
    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    /// Go to the beginning of the document.
    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    /// Go to the end of the document.
    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Go to a specific line, placing it at the top of the viewport.
    pub fn go_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    /// Keep `line` comfortably in view.
    ///
    /// Does nothing when the line is already inside the viewport's middle
    /// band; otherwise scrolls so the line sits a third of the way down.
    /// Used to make the preview follow the editor cursor without jumping
    /// on every keystroke.
    pub fn follow_line(&mut self, line: usize) {
        let height = self.height as usize;
        if height == 0 {
            return;
        }
        let band_top = self.offset;
        let band_bottom = self.offset + height.saturating_sub(1);
        if line >= band_top && line <= band_bottom {
            return;
        }
        let lead = height / 3;
        self.offset = line.saturating_sub(lead).min(self.max_offset());
    }

    /// Resize the viewport, clamping the offset to the new bounds.
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = clamp(self.offset, self.max_offset());
    }

    /// Update the total number of lines (e.g., after a preview refresh).
    pub const fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = clamp(self.offset, self.max_offset());
    }

    /// Calculate the maximum valid offset.
    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

const fn clamp(value: usize, max: usize) -> usize {
    if value > max { max } else { value }
}
