use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{Model, ToastLevel};

/// Left side of the header: app and file name.
pub fn header_title(model: &Model) -> String {
    format!(" linepad \u{2022} {}", model.document.file_name())
}

/// Right side of the header: caret position and key hints.
pub fn header_position(model: &Model) -> String {
    format!(
        "Line {} of {}  Ctrl+O: Load  F1: Help ",
        model.caret_line,
        model.document.line_count()
    )
}

/// Left side of the footer: live document statistics.
pub fn footer_stats(model: &Model) -> String {
    let stats = model.document.stats();
    format!(
        " Characters: {}  Lines: {}  Words: {}",
        stats.characters, stats.lines, stats.words
    )
}

/// Right side of the footer: load hint and highlight state.
///
/// The load hint is dropped when it would collide with the stats.
pub fn footer_hint(model: &Model, available: usize) -> String {
    let state = if model.highlight_enabled {
        "enabled"
    } else {
        "disabled"
    };
    let full = format!(
        "Ctrl+O to load .{} files \u{2022} Current line highlighting {state} ",
        model.accepted_extension
    );
    if full.width() <= available {
        full
    } else {
        format!("Current line highlighting {state} ")
    }
}

pub fn render_header(model: &Model, frame: &mut Frame, area: Rect) {
    let style = model.palette.header;
    frame.render_widget(
        Paragraph::new(header_position(model))
            .alignment(Alignment::Right)
            .style(style),
        area,
    );
    frame.render_widget(Paragraph::new(header_title(model)).style(style), area);
}

pub fn render_footer(model: &Model, frame: &mut Frame, area: Rect) {
    let style = model.palette.footer;
    let stats = footer_stats(model);
    let available = usize::from(area.width).saturating_sub(stats.width() + 1);
    frame.render_widget(
        Paragraph::new(footer_hint(model, available))
            .alignment(Alignment::Right)
            .style(style),
        area,
    );
    frame.render_widget(Paragraph::new(stats).style(style), area);
}

/// Label in front of the load prompt input.
pub fn prompt_label(model: &Model) -> String {
    format!(" Load .{} file: ", model.accepted_extension)
}

pub fn render_prompt_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let input = model.prompt.as_deref().unwrap_or_default();
    let text = format!("{}{input}", prompt_label(model));
    let bar = Paragraph::new(text).style(model.palette.prompt);
    frame.render_widget(bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => ("[info]", model.palette.toast_info),
        ToastLevel::Warning => ("[warn]", model.palette.toast_warning),
    };
    let toast = Paragraph::new(format!(" {prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
