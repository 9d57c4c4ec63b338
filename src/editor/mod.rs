//! The editable surface.
//!
//! Provides a rope-backed text buffer with caret management. Every edit
//! hands the full text back to the document.

mod buffer;

pub use buffer::{Cursor, Direction, EditorBuffer, TAB_WIDTH, char_width};
