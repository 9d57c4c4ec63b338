//! Colors for the editor chrome.
//!
//! Uses ANSI colors so the terminal's own palette still applies; the light
//! variant only swaps the tones that would vanish on a white background.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// Styles used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: Style,
    pub gutter: Style,
    pub gutter_current: Style,
    pub current_line: Style,
    pub header: Style,
    pub footer: Style,
    pub prompt: Style,
    pub toast_info: Style,
    pub toast_warning: Style,
}

impl Palette {
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Dark => Self {
                border: Style::default().fg(Color::DarkGray),
                gutter: Style::default().fg(Color::DarkGray),
                gutter_current: Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::Indexed(236))
                    .add_modifier(Modifier::BOLD),
                current_line: Style::default().bg(Color::Indexed(236)),
                header: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                footer: Style::default().fg(Color::Indexed(245)),
                prompt: Style::default().bg(Color::Blue).fg(Color::White),
                toast_info: Style::default().bg(Color::DarkGray).fg(Color::White),
                toast_warning: Style::default().bg(Color::Yellow).fg(Color::Black),
            },
            ThemeMode::Light => Self {
                border: Style::default().fg(Color::Indexed(250)),
                gutter: Style::default().fg(Color::Indexed(244)),
                gutter_current: Style::default()
                    .fg(Color::Indexed(24))
                    .bg(Color::Indexed(254))
                    .add_modifier(Modifier::BOLD),
                current_line: Style::default().bg(Color::Indexed(254)),
                header: Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                footer: Style::default().fg(Color::Indexed(242)),
                prompt: Style::default().bg(Color::Indexed(24)).fg(Color::White),
                toast_info: Style::default().bg(Color::Indexed(252)).fg(Color::Black),
                toast_warning: Style::default().bg(Color::Yellow).fg(Color::Black),
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(ThemeMode::default())
    }
}
