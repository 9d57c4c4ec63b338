use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
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
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Editing", section_style));
    lines.push(Line::raw("  Arrows, Home/End    Move caret"));
    lines.push(Line::raw("  Ctrl+Left/Right     Word movement"));
    lines.push(Line::raw("  Ctrl+Home/End       Document start / end"));
    lines.push(Line::raw("  PageUp/PageDown     Page up / down"));
    lines.push(Line::raw("  Enter, Backspace, Delete, Tab"));
    lines.push(Line::raw("  Click               Place caret"));
    lines.push(Line::raw("  Wheel               Scroll"));

    lines.push(Line::styled("Files", section_style));
    lines.push(Line::raw(format!(
        "  Ctrl+O              Load a .{} file",
        model.accepted_extension
    )));
    lines.push(Line::raw("  Enter / Esc         Load / cancel"));

    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  F1                  Toggle help"));
    lines.push(Line::raw("  Ctrl+Q / Ctrl+C     Quit"));

    lines.push(Line::styled("Config", section_style));
    lines.push(Line::raw(format!("  Global: {global_cfg}")));
    lines.push(Line::raw(format!("  Local: {local_cfg}")));
    lines.push(Line::styled("Any key closes", dim_style));

    // Border(1) + padding(1) on each side.
    #[allow(clippy::cast_possible_truncation)]
    let needed_rows = lines.len() as u16 + 4;
    let popup_width = area.width.saturating_sub(12).clamp(48.min(area.width), 72);
    let popup = centered_popup_rect(popup_width, needed_rows, area);

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
