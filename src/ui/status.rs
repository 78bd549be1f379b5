use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, Pane};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let mode = match model.focus {
        Pane::Editor => "EDIT",
        Pane::Preview => "PREVIEW",
    };

    let dirty_indicator = if model.is_dirty() { " [modified]" } else { "" };
    let watch_indicator = if model.watch_enabled {
        " [watching]"
    } else {
        ""
    };

    let cursor = model.buffer.cursor();
    let position = match model.focus {
        Pane::Editor => format!("Ln {}, Col {}", cursor.line + 1, cursor.col + 1),
        Pane::Preview => format!(
            "Line {}/{}  [{}%]",
            model.viewport.offset() + 1,
            model.viewport.total_lines(),
            model.viewport.scroll_percent()
        ),
    };

    let status = format!(
        " {mode}  {}{dirty_indicator}  {position}{watch_indicator}  Tab:pane  F1:help",
        model.display_name()
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
