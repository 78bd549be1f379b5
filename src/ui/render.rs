use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::{Model, Pane};

use super::{STATUS_BAR_ROWS, overlays, pane_areas, status};

/// Render the complete UI: editor pane, preview pane, status bar, and any
/// active overlay.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();

    let (editor_area, preview_area) = pane_areas(area, model.preview_visible);
    render_editor(model, frame, editor_area);
    if let Some(preview_area) = preview_area {
        render_preview(model, frame, preview_area);
    }

    let toast_active = model.active_toast().is_some();
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(STATUS_BAR_ROWS),
        height: STATUS_BAR_ROWS.min(area.height),
        ..area
    };
    if toast_active {
        status::render_toast_bar(model, frame, status_area);
    } else {
        status::render_status_bar(model, frame, status_area);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let block = pane_block("Editor", model.focus == Pane::Editor);
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let total_lines = buf.line_count();
    let gutter_width = line_number_width(total_lines);

    let visible_height = inner.height as usize;
    let start = model.editor_scroll_offset;
    let end = (start + visible_height).min(total_lines);
    let cursor = buf.cursor();
    let show_cursor = model.focus == Pane::Editor;

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = buf.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);

        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        if show_cursor && line_idx == cursor.line {
            // Split the line at the cursor column so the cursor cell can
            // be drawn reversed.
            let chars: Vec<char> = line_text.chars().collect();
            let col = cursor.col.min(chars.len());
            let before: String = chars[..col].iter().collect();
            let cursor_char: String = chars
                .get(col)
                .map_or_else(|| " ".to_string(), ToString::to_string);
            let after: String = if col < chars.len() {
                chars[col + 1..].iter().collect()
            } else {
                String::new()
            };

            if !before.is_empty() {
                spans.push(Span::raw(before));
            }
            spans.push(Span::styled(
                cursor_char,
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
        } else {
            spans.push(Span::raw(line_text));
        }

        content.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(content), inner);
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let block = pane_block("Preview", model.focus == Pane::Preview);
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    if preview_is_blank(model) {
        let placeholder = Paragraph::new("(empty preview - start typing markdown)")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
        frame.render_widget(placeholder, inner);
        return;
    }

    let visible_lines = model
        .preview
        .visible_lines(model.viewport.offset(), inner.height as usize);

    let mut content: Vec<Line> = Vec::new();
    for line in visible_lines {
        let line_style = super::style::style_for_line_type(line.line_type());
        if let Some(spans) = line.spans() {
            let styled_spans = spans
                .iter()
                .map(|span| {
                    Span::styled(
                        span.text().to_string(),
                        super::style::style_for_inline(line_style, span.style()),
                    )
                })
                .collect::<Vec<_>>();
            content.push(Line::from(styled_spans));
        } else {
            content.push(Line::styled(line.content().to_string(), line_style));
        }
    }

    frame.render_widget(Paragraph::new(content), inner);
}

fn preview_is_blank(model: &Model) -> bool {
    model.preview.line_count() == 0
        || model
            .preview
            .source()
            .chars()
            .all(char::is_whitespace)
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
