//! The in-memory text document and the metrics derived from it.
//!
//! This module handles:
//! - Holding the current text and file name ([`Document`])
//! - Deriving line count, caret line and word/char counts ([`line_index`])

pub mod line_index;
mod types;

pub use types::{Document, DocumentStats, UNTITLED};
