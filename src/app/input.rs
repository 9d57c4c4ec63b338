use std::path::PathBuf;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::ui::layout::editor_layout;

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) => Self::handle_paste(text, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize", format!("width={w} height={h}"));
                Some(Message::Resize(*w, *h))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if let Some(input) = model.prompt.as_ref() {
            return match key.code {
                KeyCode::Esc => Some(Message::CancelPrompt),
                KeyCode::Enter => {
                    let trimmed = input.trim();
                    if trimmed.is_empty() {
                        Some(Message::CancelPrompt)
                    } else {
                        Some(Message::RequestLoad(expand_home(trimmed)))
                    }
                }
                KeyCode::Backspace => {
                    let mut next = input.clone();
                    next.pop();
                    Some(Message::PromptInput(next))
                }
                KeyCode::Char('c') if ctrl => Some(Message::CancelPrompt),
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    let mut next = input.clone();
                    next.push(c);
                    Some(Message::PromptInput(next))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q' | 'c') if ctrl => Some(Message::Quit),
            KeyCode::Char('o') if ctrl => Some(Message::OpenLoadPrompt),
            KeyCode::F(1) => Some(Message::ToggleHelp),

            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Left if ctrl => Some(Message::MoveWordLeft),
            KeyCode::Right if ctrl => Some(Message::MoveWordRight),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Home if ctrl => Some(Message::MoveToStart),
            KeyCode::End if ctrl => Some(Message::MoveToEnd),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::PageDown => Some(Message::PageDown),

            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Tab => Some(Message::InsertChar('\t')),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::InsertChar(c))
            }
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return None;
        }

        let (width, height) = model.terminal_size;
        let layout = editor_layout(
            Rect::new(0, 0, width, height),
            model.document.line_count(),
        );

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if model.prompt_active() || !point_in_rect(mouse.column, mouse.row, layout.surface)
                {
                    return None;
                }
                let line = model.viewport.offset() + usize::from(mouse.row - layout.surface.y);
                let col = model.viewport.col_offset() + usize::from(mouse.column - layout.surface.x);
                Some(Message::ClickAt { line, col })
            }
            MouseEventKind::ScrollDown
                if point_in_rect(mouse.column, mouse.row, layout.editor) =>
            {
                model
                    .viewport
                    .can_scroll_down()
                    .then_some(Message::ScrollDown(WHEEL_STEP))
            }
            MouseEventKind::ScrollUp if point_in_rect(mouse.column, mouse.row, layout.editor) => {
                model
                    .viewport
                    .can_scroll_up()
                    .then_some(Message::ScrollUp(WHEEL_STEP))
            }
            _ => None,
        }
    }

    pub(super) fn handle_paste(text: &str, model: &Model) -> Option<Message> {
        if model.help_visible {
            return None;
        }
        if let Some(input) = model.prompt.as_ref() {
            // Paths are single-line.
            let line = text.lines().next().unwrap_or_default();
            return Some(Message::PromptInput(format!("{input}{line}")));
        }
        if text.is_empty() {
            return None;
        }
        Some(Message::InsertText(normalize_newlines(text)))
    }
}

const fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Terminals deliver pasted line breaks as CR; the document uses LF.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(input)
}
