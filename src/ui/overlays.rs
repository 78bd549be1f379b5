use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(6).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut all_lines: Vec<Line> = Vec::new();

    all_lines.push(Line::styled("Global", section_style));
    all_lines.push(Line::raw("  Ctrl-s              Save"));
    all_lines.push(Line::raw("  Ctrl-q              Quit"));
    all_lines.push(Line::raw("  Ctrl-p              Toggle preview pane"));
    all_lines.push(Line::raw("  Ctrl-r              Reload from disk"));
    all_lines.push(Line::raw("  Tab                 Switch pane focus"));
    all_lines.push(Line::raw("  F1                  Toggle help"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Editor pane", section_style));
    all_lines.push(Line::raw("  Arrows, Home/End    Move cursor"));
    all_lines.push(Line::raw("  Ctrl+Left/Right     Word movement"));
    all_lines.push(Line::raw("  Ctrl+Home/End       Buffer start / end"));
    all_lines.push(Line::raw("  PageUp/PageDown     Page movement"));
    all_lines.push(Line::raw("  Enter/Backspace/Del Edit"));
    all_lines.push(Line::raw("  Mouse click         Place cursor"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Preview pane", section_style));
    all_lines.push(Line::raw("  j/k or Up/Down      Scroll"));
    all_lines.push(Line::raw("  Space/PageDown      Page down"));
    all_lines.push(Line::raw("  b/PageUp            Page up"));
    all_lines.push(Line::raw("  g / G               Top / bottom"));
    all_lines.push(Line::raw("  w                   Toggle watch"));
    all_lines.push(Line::raw("  r                   Reload file"));
    all_lines.push(Line::raw("  e / Esc             Back to editor"));
    all_lines.push(Line::raw("  q                   Quit"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Config", section_style));
    all_lines.push(Line::raw(format!("  Global: {global_cfg}")));
    all_lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    let visible = all_lines
        .into_iter()
        .take(inner.height as usize)
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(visible), inner);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
