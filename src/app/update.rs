use std::path::PathBuf;

use crate::app::{Model, ToastLevel};
use crate::editor::Direction;
use crate::import::ImportOutcome;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the caret
    InsertChar(char),
    /// Insert pasted text at the caret
    InsertText(String),
    /// Delete character before the caret (Backspace)
    DeleteBack,
    /// Delete character at the caret (Delete)
    DeleteForward,
    /// Split line at the caret (Enter)
    SplitLine,

    // Caret movement
    /// Move the caret one step in a direction
    MoveCursor(Direction),
    MoveHome,
    MoveEnd,
    MoveWordLeft,
    MoveWordRight,
    /// Caret to the start of the document
    MoveToStart,
    /// Caret to the end of the document
    MoveToEnd,
    /// Caret and view up one page
    PageUp,
    /// Caret and view down one page
    PageDown,
    /// Pointer press at a buffer line and display column
    ClickAt { line: usize, col: usize },

    // Scrolling without moving the caret
    /// Scroll the surface up by n lines
    ScrollUp(usize),
    /// Scroll the surface down by n lines
    ScrollDown(usize),

    // File loading
    /// Open the load prompt
    OpenLoadPrompt,
    /// Replace the prompt text
    PromptInput(String),
    /// Close the prompt without loading
    CancelPrompt,
    /// Ask the importer to read a file
    RequestLoad(PathBuf),
    /// Background read finished
    FileLoaded { file_name: String, text: String },
    /// Background read failed
    FileReadFailed { file_name: String, error: String },

    // Window
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Exit the application
    Quit,
}

impl Message {
    /// Whether the message may move the caret.
    ///
    /// The caret line is recomputed after every such message.
    pub const fn is_caret_event(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertText(_)
                | Self::DeleteBack
                | Self::DeleteForward
                | Self::SplitLine
                | Self::MoveCursor(_)
                | Self::MoveHome
                | Self::MoveEnd
                | Self::MoveWordLeft
                | Self::MoveWordRight
                | Self::MoveToStart
                | Self::MoveToEnd
                | Self::PageUp
                | Self::PageDown
                | Self::ClickAt { .. }
        )
    }
}

impl From<ImportOutcome> for Message {
    fn from(outcome: ImportOutcome) -> Self {
        match outcome {
            ImportOutcome::Loaded {
                file_name, text, ..
            } => Self::FileLoaded { file_name, text },
            ImportOutcome::Failed {
                file_name, error, ..
            } => Self::FileReadFailed { file_name, error },
        }
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    let caret_event = msg.is_caret_event();

    match msg {
        // Editing
        Message::InsertChar(ch) => {
            model.surface.insert_char(ch);
            model.commit_edit();
        }
        Message::InsertText(text) => {
            model.surface.insert_str(&text);
            model.commit_edit();
        }
        Message::DeleteBack => {
            if model.surface.delete_back() {
                model.commit_edit();
            }
        }
        Message::DeleteForward => {
            if model.surface.delete_forward() {
                model.commit_edit();
            }
        }
        Message::SplitLine => {
            model.surface.split_line();
            model.commit_edit();
        }

        // Caret movement
        Message::MoveCursor(dir) => model.surface.move_cursor(dir),
        Message::MoveHome => model.surface.move_home(),
        Message::MoveEnd => model.surface.move_end(),
        Message::MoveWordLeft => model.surface.move_word_left(),
        Message::MoveWordRight => model.surface.move_word_right(),
        Message::MoveToStart => model.surface.move_to_start(),
        Message::MoveToEnd => model.surface.move_to_end(),
        Message::PageUp => {
            let page = model.viewport.page_len();
            model.viewport.scroll_up(page);
            model.surface.move_lines(-isize::try_from(page).unwrap_or(isize::MAX));
        }
        Message::PageDown => {
            let page = model.viewport.page_len();
            model.viewport.scroll_down(page);
            model.surface.move_lines(isize::try_from(page).unwrap_or(isize::MAX));
        }
        Message::ClickAt { line, col } => {
            // Below the last line the caret lands at the very end.
            if line >= model.surface.line_count() {
                model.surface.move_to_end();
            } else {
                model.surface.move_to_display_col(line, col);
            }
        }

        // Scrolling
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),

        // File loading
        Message::OpenLoadPrompt => {
            model.help_visible = false;
            model.prompt = Some(String::new());
        }
        Message::PromptInput(text) => {
            if model.prompt.is_some() {
                model.prompt = Some(text);
            }
        }
        Message::CancelPrompt | Message::RequestLoad(_) => {
            model.prompt = None;
        }
        Message::FileLoaded { file_name, text } => {
            let message = format!(
                "File loaded successfully: {file_name} has been loaded into the editor"
            );
            model.load_text(file_name, text);
            model.show_toast(ToastLevel::Info, message);
        }
        Message::FileReadFailed { file_name, error } => {
            // The document stays as it was; nothing is shown to the user.
            tracing::info!(file = %file_name, %error, "file read failed");
            crate::perf::log_event(
                "import.failed",
                format!("file={file_name} error={error}"),
            );
        }

        // Window
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.reflow_layout();
        }
        Message::Quit => {
            model.should_quit = true;
        }
    }

    if caret_event {
        model.refresh_caret_line();
        model.reveal_caret();
    }

    // Every change of the surface offset is a scroll event for the gutter.
    if model.gutter.scroll_offset() != model.viewport.offset() {
        model.sync_gutter();
    }

    model
}
