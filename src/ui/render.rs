use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::editor::char_width;

use super::layout::{EditorLayout, editor_block, editor_layout};
use super::{overlays, status};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = editor_layout(area, model.document.line_count());

    status::render_header(model, frame, layout.header);
    render_editor(model, frame, &layout);

    if model.prompt_active() {
        status::render_prompt_bar(model, frame, layout.message);
    } else {
        status::render_toast_bar(model, frame, layout.message);
    }
    status::render_footer(model, frame, layout.footer);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    } else if let Some(position) = cursor_position(model, &layout) {
        frame.set_cursor_position(position);
    }
}

fn render_editor(model: &Model, frame: &mut Frame, layout: &EditorLayout) {
    let palette = &model.palette;
    frame.render_widget(editor_block().border_style(palette.border), layout.editor);

    let total_lines = model.document.line_count();
    let current_line = model.highlight_enabled.then_some(model.caret_line);
    model
        .gutter
        .render(frame, layout.gutter, total_lines, current_line, palette);

    let rule: Vec<Line> = (0..layout.separator.height)
        .map(|_| Line::styled("\u{2502}", palette.border))
        .collect();
    frame.render_widget(Paragraph::new(rule), layout.separator);

    render_surface(model, frame, layout.surface);
}

fn render_surface(model: &Model, frame: &mut Frame, area: Rect) {
    let col_offset = model.viewport.col_offset();
    let width = area.width as usize;
    let lines: Vec<Line> = model
        .viewport
        .visible_range()
        .map(|idx| {
            let text = model.surface.line_at(idx).unwrap_or_default();
            Line::raw(visible_segment(&text, col_offset, width))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    if !model.highlight_enabled {
        return;
    }
    // The caret line is one-based.
    let Some(idx) = model.caret_line.checked_sub(1) else {
        return;
    };
    if model.viewport.visible_range().contains(&idx) {
        #[allow(clippy::cast_possible_truncation)]
        let row = Rect {
            y: area.y + (idx - model.viewport.offset()) as u16,
            height: 1,
            ..area
        };
        frame.buffer_mut().set_style(row, model.palette.current_line);
    }
}

/// Terminal cell for the hardware cursor: the prompt input when the
/// prompt is open, otherwise the caret when it is on screen.
fn cursor_position(model: &Model, layout: &EditorLayout) -> Option<Position> {
    if let Some(input) = model.prompt.as_deref() {
        let used = status::prompt_label(model).width() + input.width();
        let x = u16::try_from(used)
            .unwrap_or(u16::MAX)
            .min(layout.message.width.saturating_sub(1));
        return Some(Position::new(layout.message.x + x, layout.message.y));
    }

    let surface = layout.surface;
    let cursor = model.surface.cursor();
    let row = cursor.line.checked_sub(model.viewport.offset())?;
    let col = model
        .surface
        .caret_display_col()
        .checked_sub(model.viewport.col_offset())?;
    if row >= surface.height as usize || col >= surface.width as usize {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    Some(Position::new(surface.x + col as u16, surface.y + row as u16))
}

/// The part of `line` between display columns `col_offset` and
/// `col_offset + width`, with tabs expanded.
///
/// A wide char cut by either edge is replaced with spaces.
pub fn visible_segment(line: &str, col_offset: usize, width: usize) -> String {
    let end = col_offset + width;
    let mut out = String::new();
    let mut col = 0;
    for ch in line.chars() {
        if col >= end {
            break;
        }
        // Stray control chars (a lone `\r`) take no cells.
        if ch.is_control() && ch != '\t' {
            continue;
        }
        let w = char_width(ch);
        let next = col + w;
        if next <= col_offset {
            col = next;
            continue;
        }
        if col < col_offset || next > end || ch == '\t' {
            let from = col.max(col_offset);
            let to = next.min(end);
            out.extend(std::iter::repeat_n(' ', to - from));
        } else {
            out.push(ch);
        }
        col = next;
    }
    out
}
