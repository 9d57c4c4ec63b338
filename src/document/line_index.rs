//! Line metrics derived from raw document text.
//!
//! Nothing here is cached. Every function walks the text it is given.

/// Number of newline-delimited lines in `text`.
///
/// Always at least 1: an empty document has a single empty line.
///
/// # Example
///
/// ```
/// use linepad::document::line_index::line_count;
///
/// assert_eq!(line_count(""), 1);
/// assert_eq!(line_count("a\nb\n"), 3);
/// ```
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// One-based line containing the caret at `caret_offset`.
///
/// The offset is measured in chars and clamped to the text length. A caret
/// sitting right after a `'\n'` belongs to the line being entered.
pub fn caret_line(text: &str, caret_offset: usize) -> usize {
    let prefix = match text.char_indices().nth(caret_offset) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    };
    line_count(prefix)
}

/// Number of whitespace-separated words, 0 for blank text.
pub fn word_count(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.split_whitespace().count()
}

/// Number of chars in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
