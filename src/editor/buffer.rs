use ropey::{Rope, RopeSlice};
use unicode_width::UnicodeWidthChar;

/// Caret position on the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, in chars from the start of the line.
    pub col: usize,
    /// Column to return to when moving vertically through short lines.
    goal_col: usize,
}

impl Cursor {
    /// Cursor at the very start of the buffer.
    pub const fn new() -> Self {
        Self::at(0, 0)
    }

    /// Cursor at a specific line and char column.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            goal_col: col,
        }
    }

    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.goal_col = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The editable surface: a rope plus a caret.
///
/// This plays the part of a native text field. It owns the editing
/// mechanics (insertion, deletion, caret movement) while the
/// [`Document`](crate::document::Document) receives a full copy of the
/// text after each edit.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
}

impl EditorBuffer {
    /// Create a buffer from a string with the caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::new(),
        }
    }

    /// Replace the whole content and put the caret back at the start.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = Cursor::new();
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Total number of lines, counting a trailing empty line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its line terminator.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(
            line.trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string(),
        )
    }

    /// Length of a line in chars, excluding its line terminator.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        content_len(self.rope.line(line_idx))
    }

    /// The full text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Caret position as a char offset from the start of the text.
    pub fn caret_offset(&self) -> usize {
        self.rope.line_to_char(self.cursor.line) + self.cursor.col
    }

    /// Display column of the caret, accounting for wide chars.
    pub fn caret_display_col(&self) -> usize {
        self.rope
            .line(self.cursor.line)
            .chars()
            .take(self.cursor.col)
            .map(char_width)
            .sum()
    }

    pub fn insert_char(&mut self, ch: char) {
        self.rope.insert_char(self.caret_offset(), ch);
        if ch == '\n' {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        } else {
            self.cursor.set_col(self.cursor.col + 1);
        }
    }

    /// Insert a string at the caret (paste) and leave the caret after it.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let start = self.caret_offset();
        self.rope.insert(start, s);
        self.place_caret(start + s.chars().count());
    }

    /// Split the current line at the caret (Enter).
    pub fn split_line(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the char before the caret (Backspace).
    ///
    /// Returns `true` if something was deleted.
    pub fn delete_back(&mut self) -> bool {
        let offset = self.caret_offset();
        if offset == 0 {
            return false;
        }
        // A CRLF pair is removed as one line break.
        let start = if self.rope.char(offset - 1) == '\n'
            && offset >= 2
            && self.rope.char(offset - 2) == '\r'
        {
            offset - 2
        } else {
            offset - 1
        };
        self.rope.remove(start..offset);
        self.place_caret(start);
        true
    }

    /// Delete the char at the caret (Delete).
    ///
    /// Returns `true` if something was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let offset = self.caret_offset();
        let total = self.rope.len_chars();
        if offset >= total {
            return false;
        }
        let end = if self.rope.char(offset) == '\r'
            && offset + 1 < total
            && self.rope.char(offset + 1) == '\n'
        {
            offset + 2
        } else {
            offset + 1
        };
        self.rope.remove(offset..end);
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_vertical(-1),
            Direction::Down => self.move_vertical(1),
        }
    }

    /// Move the caret by whole lines, keeping the goal column.
    pub fn move_lines(&mut self, delta: isize) {
        self.move_vertical(delta);
    }

    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    pub fn move_end(&mut self) {
        self.cursor.set_col(self.line_len(self.cursor.line));
    }

    /// Move to the start of the previous word (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.set_col(self.line_len(self.cursor.line));
            }
            return;
        }
        let chars: Vec<char> = self.line_chars(self.cursor.line);
        let mut col = self.cursor.col.min(chars.len());
        while col > 0 && !is_word_char(chars[col - 1]) {
            col -= 1;
        }
        while col > 0 && is_word_char(chars[col - 1]) {
            col -= 1;
        }
        self.cursor.set_col(col);
    }

    /// Move to the start of the next word (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let len = self.line_len(self.cursor.line);
        if self.cursor.col >= len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.set_col(0);
            }
            return;
        }
        let chars: Vec<char> = self.line_chars(self.cursor.line);
        let mut col = self.cursor.col;
        while col < len && is_word_char(chars[col]) {
            col += 1;
        }
        while col < len && !is_word_char(chars[col]) {
            col += 1;
        }
        self.cursor.set_col(col);
    }

    /// Move the caret to a line and char column, clamped to the text.
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.cursor.line = line.min(self.line_count().saturating_sub(1));
        self.cursor.set_col(col.min(self.line_len(self.cursor.line)));
    }

    /// Move the caret to a line and a display column (mouse click).
    ///
    /// A click on the right half of a wide char lands before it.
    pub fn move_to_display_col(&mut self, line: usize, display_col: usize) {
        let line = line.min(self.line_count().saturating_sub(1));
        let mut width = 0;
        let mut col = 0;
        for ch in self.line_chars(line) {
            let w = char_width(ch);
            if width + w > display_col {
                break;
            }
            width += w;
            col += 1;
        }
        self.move_to(line, col);
    }

    pub const fn move_to_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.set_col(0);
    }

    pub fn move_to_end(&mut self) {
        let last = self.line_count().saturating_sub(1);
        self.cursor.line = last;
        self.cursor.set_col(self.line_len(last));
    }

    /// Put the caret at an absolute char offset.
    fn place_caret(&mut self, offset: usize) {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let col = offset - self.rope.line_to_char(line);
        self.cursor.line = line;
        self.cursor.set_col(col.min(self.line_len(line)));
    }

    fn line_chars(&self, line_idx: usize) -> Vec<char> {
        let line = self.rope.line(line_idx);
        line.chars().take(content_len(line)).collect()
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.set_col(self.cursor.col - 1);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.set_col(self.cursor.col + 1);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let last = self.line_count().saturating_sub(1);
        let target = self.cursor.line.saturating_add_signed(delta).min(last);
        if target == self.cursor.line {
            return;
        }
        self.cursor.line = target;
        self.cursor.col = self.cursor.goal_col.min(self.line_len(target));
    }
}

/// Chars in a rope line, not counting `\n` or `\r\n`.
fn content_len(line: RopeSlice<'_>) -> usize {
    let mut len = line.len_chars();
    if len > 0 && line.char(len - 1) == '\n' {
        len -= 1;
        if len > 0 && line.char(len - 1) == '\r' {
            len -= 1;
        }
    }
    len
}

/// Columns a tab occupies on screen.
pub const TAB_WIDTH: usize = 4;

/// Display width of a char on the surface; tabs are a fixed [`TAB_WIDTH`].
pub fn char_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .finish()
    }
}
