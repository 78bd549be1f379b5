//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Theming and colors
//! - Pane layout helpers shared by rendering and mouse handling

pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::{line_number_width, render};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const EDITOR_WIDTH_PERCENT: u16 = 50;
pub const PREVIEW_WIDTH_PERCENT: u16 = 50;

/// Rows reserved at the bottom of the frame for the status bar.
pub const STATUS_BAR_ROWS: u16 = 1;

/// Horizontal cells a pane's border and inner padding consume.
const PANE_CHROME_WIDTH: u16 = 4;
/// Vertical cells a pane's border consumes.
const PANE_CHROME_HEIGHT: u16 = 2;

/// Split the content area (frame minus status bar) into editor and
/// preview pane rectangles. The preview rect is `None` when hidden.
pub fn pane_areas(area: Rect, preview_visible: bool) -> (Rect, Option<Rect>) {
    let content = Rect {
        height: area.height.saturating_sub(STATUS_BAR_ROWS),
        ..area
    };
    if !preview_visible {
        return (content, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
            Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
        ])
        .split(content);
    (chunks[0], Some(chunks[1]))
}

/// Width available to wrapped preview content for a given terminal width.
///
/// Used both for rendering and for parsing, so the wrap width always
/// matches what the preview pane can actually show.
pub fn preview_content_width(total_width: u16, preview_visible: bool) -> u16 {
    let probe = Rect::new(0, 0, total_width, 3);
    let pane_width = if preview_visible {
        pane_areas(probe, true).1.map_or(total_width, |r| r.width)
    } else {
        total_width
    };
    pane_width.saturating_sub(PANE_CHROME_WIDTH).max(1)
}

/// Rows of text visible inside a pane for a given terminal height.
pub fn pane_content_height(total_height: u16) -> u16 {
    total_height
        .saturating_sub(STATUS_BAR_ROWS)
        .saturating_sub(PANE_CHROME_HEIGHT)
        .max(1)
}

#[cfg(test)]
mod tests;
