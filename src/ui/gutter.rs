//! The line-number column beside the editing surface.
//!
//! The gutter never scrolls on its own. Its offset is copied from the
//! surface after every surface scroll, one way only.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::style::Palette;

/// Blank columns on each side of the numbers.
const GUTTER_PADDING: u16 = 1;

/// Display-only state of the gutter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Gutter {
    scroll_offset: usize,
}

impl Gutter {
    pub const fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    /// First line number shown.
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Mirror the surface's vertical scroll offset.
    pub const fn sync_scroll(&mut self, surface_offset: usize) {
        self.scroll_offset = surface_offset;
    }

    /// Lines for rows `0..height`, numbering from the gutter's own offset.
    ///
    /// `current_line` is one-based; pass `None` to disable the highlight.
    pub fn lines(
        &self,
        total_lines: usize,
        height: usize,
        current_line: Option<usize>,
        palette: &Palette,
    ) -> Vec<Line<'static>> {
        let digits = usize::from(line_number_width(total_lines));
        let start = self.scroll_offset.min(total_lines);
        let end = (start + height).min(total_lines);
        (start..end)
            .map(|idx| {
                let number = idx + 1;
                let style = if current_line == Some(number) {
                    palette.gutter_current
                } else {
                    palette.gutter
                };
                Line::styled(format!(" {number:>digits$} "), style)
            })
            .collect()
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        total_lines: usize,
        current_line: Option<usize>,
        palette: &Palette,
    ) {
        let lines = self.lines(total_lines, area.height as usize, current_line, palette);
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Columns the gutter needs for `total_lines`, padding included.
pub const fn gutter_width(total_lines: usize) -> u16 {
    line_number_width(total_lines) + GUTTER_PADDING * 2
}

/// Digits needed for the largest line number, never fewer than 2.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else if total_lines < 1_000_000 {
        6
    } else {
        7
    }
}
