use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::ThemeMode;
use crate::document::Document;
use crate::editor::EditorBuffer;
use crate::import::DEFAULT_EXTENSION;
use crate::ui::gutter::Gutter;
use crate::ui::layout::surface_size;
use crate::ui::style::Palette;
use crate::ui::viewport::Viewport;

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Current text and file name
    pub document: Document,
    /// Editable surface holding the caret
    pub surface: EditorBuffer,
    /// Scroll state of the surface
    pub viewport: Viewport,
    /// Line-number column, scrolled in lockstep with the surface
    pub gutter: Gutter,
    /// One-based line containing the caret, as of the last caret event
    pub caret_line: usize,
    /// Terminal size the layout was computed for
    pub terminal_size: (u16, u16),
    /// Whether the caret line is highlighted
    pub highlight_enabled: bool,
    /// Colors for the current theme
    pub palette: Palette,
    /// Extension accepted by the load prompt, without the dot
    pub accepted_extension: String,
    /// Text typed into the load prompt, when it is open
    pub prompt: Option<String>,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_name", &self.document.file_name())
            .field("caret_line", &self.caret_line)
            .field("viewport", &self.viewport)
            .field("gutter", &self.gutter)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model showing `document` in a terminal of the given size.
    pub fn new(document: Document, terminal_size: (u16, u16)) -> Self {
        let total_lines = document.line_count();
        let (width, height) = surface_size(terminal_size.0, terminal_size.1, total_lines);
        let surface = EditorBuffer::from_text(document.text());
        let caret_line = document.caret_line(surface.caret_offset());

        Self {
            document,
            surface,
            viewport: Viewport::new(width, height, total_lines),
            gutter: Gutter::new(),
            caret_line,
            terminal_size,
            highlight_enabled: true,
            palette: Palette::default(),
            accepted_extension: DEFAULT_EXTENSION.to_string(),
            prompt: None,
            help_visible: false,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }

    /// Set the color theme.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.palette = Palette::for_theme(theme);
        self
    }

    /// Recompute the caret line from the document and the caret offset.
    pub(super) fn refresh_caret_line(&mut self) {
        self.caret_line = self.document.caret_line(self.surface.caret_offset());
    }

    /// Copy the surface scroll offset into the gutter.
    pub(super) fn sync_gutter(&mut self) {
        self.gutter.sync_scroll(self.viewport.offset());
        crate::perf::log_event(
            "gutter.sync",
            format!("offset={}", self.gutter.scroll_offset()),
        );
    }

    /// Hand the surface's full text to the document after an edit.
    pub(super) fn commit_edit(&mut self) {
        self.document.replace_text(self.surface.text());
        self.reflow_layout();
    }

    /// Replace the document with freshly loaded file contents.
    pub(super) fn load_text(&mut self, file_name: String, text: String) {
        self.surface.set_text(&text);
        self.document.replace(text, file_name);
        self.caret_line = 1;
        self.reflow_layout();
        self.viewport.go_to_top();
    }

    /// Scroll so the caret is on screen.
    pub(super) fn reveal_caret(&mut self) {
        self.viewport.ensure_line_visible(self.surface.cursor().line);
        self.viewport
            .ensure_col_visible(self.surface.caret_display_col());
    }

    /// Resize the surface viewport for the current terminal and line count.
    pub(super) fn reflow_layout(&mut self) {
        let total_lines = self.document.line_count();
        let (width, height) = surface_size(self.terminal_size.0, self.terminal_size.1, total_lines);
        self.viewport.set_total_lines(total_lines);
        self.viewport.resize(width, height);
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    /// Drop the toast once it has expired; returns true if one was removed.
    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    pub const fn prompt_active(&self) -> bool {
        self.prompt.is_some()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Document::seed(), (80, 24))
    }
}
