//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod terminal;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::ThemeMode;
use crate::import::DEFAULT_EXTENSION;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    initial_file: Option<PathBuf>,
    extension: String,
    highlight_enabled: bool,
    theme: ThemeMode,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application, optionally loading a file at startup.
    pub fn new(initial_file: Option<PathBuf>) -> Self {
        Self {
            initial_file,
            extension: DEFAULT_EXTENSION.to_string(),
            highlight_enabled: true,
            theme: ThemeMode::default(),
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Set the extension accepted by the load prompt, without the dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Enable or disable current-line highlighting.
    pub const fn with_highlight(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

#[cfg(test)]
mod tests;
