use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

/// Terminal in raw mode with mouse capture and bracketed paste.
///
/// Everything is undone on drop, including when the event loop bails
/// out with an error.
pub(super) struct TerminalSession {
    pub(super) terminal: DefaultTerminal,
}

impl TerminalSession {
    pub(super) fn start() -> Result<Self> {
        let terminal = ratatui::try_init()
            .context("Failed to initialize terminal - linepad requires an interactive terminal")?;
        // Construct first so a failure below still restores the terminal.
        let session = Self { terminal };
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
            .context("Failed to enable mouse capture")?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
        ratatui::restore();
    }
}
