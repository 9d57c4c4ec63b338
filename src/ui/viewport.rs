//! Scroll state of the editable surface.
//!
//! The [`Viewport`] tracks which rows and columns of the buffer are visible
//! and handles all scroll operations. Its vertical offset is the value the
//! gutter mirrors.

use std::ops::Range;

/// Visible window onto the buffer.
///
/// # Example
///
/// ```
/// use linepad::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 20, 100);
/// assert_eq!(vp.visible_range(), 0..20);
///
/// vp.scroll_down(10);
/// assert_eq!(vp.visible_range(), 10..30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    col_offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a viewport of `width` x `height` cells over `total_lines`.
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            col_offset: 0,
            total_lines,
        }
    }

    /// First visible line (the vertical scroll offset).
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// First visible display column.
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    #[cfg(test)]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[cfg(test)]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Range of visible line indices, clamped to the buffer.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total_lines);
        self.offset..end.max(self.offset)
    }

    pub const fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub const fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    /// Jump to an absolute offset, clamped to the last full page.
    #[cfg(test)]
    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    pub const fn page_len(&self) -> usize {
        if self.height == 0 { 1 } else { self.height as usize }
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
        self.col_offset = 0;
    }

    /// Scroll the minimum amount needed to show `line`.
    pub fn ensure_line_visible(&mut self, line: usize) {
        let height = self.page_len();
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + height {
            self.offset = line + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll horizontally so display column `col` is inside the window.
    pub const fn ensure_col_visible(&mut self, col: usize) {
        let width = if self.width == 0 { 1 } else { self.width as usize };
        if col < self.col_offset {
            self.col_offset = col;
        } else if col >= self.col_offset + width {
            self.col_offset = col + 1 - width;
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the line count after an edit or load.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}
