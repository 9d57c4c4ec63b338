// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. import::ImportError)
    clippy::module_name_repetitions
)]

//! # Linepad
//!
//! A plain-text editor for the terminal with a line-number gutter.
//!
//! Linepad shows:
//! - A gutter of line numbers that scrolls with the text
//! - Highlighting of the line holding the caret
//! - Live character, line and word counts
//! - Loading of local `.txt` files
//!
//! ## Architecture
//!
//! Linepad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`document`]: Document text and line counting
//! - [`editor`]: Editable text buffer and caret
//! - [`import`]: Background file loading
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod import;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::Document;
    pub use crate::ui::viewport::Viewport;
}
