use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use super::gutter::gutter_width;

/// Screen regions of one frame.
///
/// The same computation drives rendering, mouse hit-testing and the
/// surface viewport size, so the three always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub header: Rect,
    /// Bordered box holding the gutter and the surface
    pub editor: Rect,
    pub gutter: Rect,
    /// One-column rule between gutter and surface
    pub separator: Rect,
    pub surface: Rect,
    /// Prompt or toast row
    pub message: Rect,
    pub footer: Rect,
}

pub fn editor_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// Split `area` for a document of `total_lines` lines.
pub fn editor_layout(area: Rect, total_lines: usize) -> EditorLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    let (header, editor, message, footer) = (rows[0], rows[1], rows[2], rows[3]);

    let inner = editor_block().inner(editor);
    let gutter_w = gutter_width(total_lines).min(inner.width);
    let gutter = Rect {
        width: gutter_w,
        ..inner
    };
    let separator = Rect {
        x: inner.x + gutter_w,
        width: u16::from(inner.width > gutter_w),
        ..inner
    };
    let surface_x = separator.x + separator.width;
    let surface = Rect {
        x: surface_x,
        width: inner.width.saturating_sub(surface_x - inner.x),
        ..inner
    };

    EditorLayout {
        header,
        editor,
        gutter,
        separator,
        surface,
        message,
        footer,
    }
}

/// Size of the editable surface for a terminal of `width` x `height`.
pub fn surface_size(width: u16, height: u16, total_lines: usize) -> (u16, u16) {
    let surface = editor_layout(Rect::new(0, 0, width, height), total_lines).surface;
    (surface.width, surface.height)
}
