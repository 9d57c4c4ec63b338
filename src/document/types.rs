use super::line_index;

/// Text shown before any file has been loaded.
const SEED_TEXT: &str = "Welcome to linepad!\n\
\n\
Move the caret here and start typing...\n\
\n\
Features:\n\
- Line numbers that follow the editor's scroll position\n\
- Current line highlighting\n\
- Loading local .txt files (Ctrl+O)\n\
- Character, line and word counts in the footer";

/// File name used for the seed document.
pub const UNTITLED: &str = "untitled.txt";

/// Counters shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    /// Chars in the document
    pub characters: usize,
    /// Newline-delimited lines, always at least 1
    pub lines: usize,
    /// Whitespace-separated words
    pub words: usize,
}

/// The in-memory document: its full text and the name it was loaded from.
///
/// Edits never patch the text in place; every change replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    file_name: String,
}

impl Document {
    /// Create a document with the given text and file name.
    pub fn new(text: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            file_name: file_name.into(),
        }
    }

    /// The welcome document shown at startup.
    pub fn seed() -> Self {
        Self::new(SEED_TEXT, UNTITLED)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Replace the full text, keeping the file name.
    pub fn replace_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace both text and file name (used after a file load).
    pub fn replace(&mut self, text: impl Into<String>, file_name: impl Into<String>) {
        self.text = text.into();
        self.file_name = file_name.into();
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        line_index::line_count(&self.text)
    }

    /// One-based line of the caret at the given char offset.
    pub fn caret_line(&self, caret_offset: usize) -> usize {
        line_index::caret_line(&self.text, caret_offset)
    }

    /// Derive all footer counters from the current text.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            characters: line_index::char_count(&self.text),
            lines: self.line_count(),
            words: line_index::word_count(&self.text),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::seed()
    }
}
