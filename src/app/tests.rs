use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tempfile::tempdir;

use crate::document::{Document, UNTITLED};
use crate::editor::Direction;
use crate::import::FileImporter;

use super::{App, Message, Model, ToastLevel, update};

fn create_test_model() -> Model {
    Model::default()
}

fn create_long_test_model() -> Model {
    let text = (1..=200)
        .map(|n| format!("Line {n} of content."))
        .collect::<Vec<_>>()
        .join("\n");
    Model::new(Document::new(text, "long.txt"), (80, 24))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn loaded(file_name: &str, text: &str) -> Message {
    Message::FileLoaded {
        file_name: file_name.to_string(),
        text: text.to_string(),
    }
}

// Caret line

#[test]
fn test_seed_document_starts_on_line_one() {
    let model = create_test_model();
    assert_eq!(model.document.line_count(), 9);
    assert_eq!(model.document.file_name(), UNTITLED);
    assert_eq!(model.caret_line, 1);
    assert_eq!(model.gutter.scroll_offset(), 0);
}

#[test]
fn test_click_at_start_of_line_five_sets_caret_line() {
    let model = update(create_test_model(), Message::ClickAt { line: 4, col: 0 });
    assert_eq!(model.caret_line, 5);
    assert_eq!(model.surface.cursor().line, 4);
    assert_eq!(model.surface.cursor().col, 0);
}

#[test]
fn test_click_below_last_line_lands_at_end() {
    let model = update(create_test_model(), Message::ClickAt { line: 15, col: 3 });
    assert_eq!(model.caret_line, 9);
    assert_eq!(
        model.surface.caret_offset(),
        model.document.text().chars().count()
    );
}

#[test]
fn test_arrow_keys_update_caret_line() {
    let model = update(create_test_model(), Message::MoveCursor(Direction::Down));
    let model = update(model, Message::MoveCursor(Direction::Down));
    assert_eq!(model.caret_line, 3);
    let model = update(model, Message::MoveCursor(Direction::Up));
    assert_eq!(model.caret_line, 2);
}

#[test]
fn test_split_line_adds_line_and_moves_caret() {
    let model = update(create_test_model(), Message::SplitLine);
    assert_eq!(model.document.line_count(), 10);
    assert_eq!(model.caret_line, 2);
    assert_eq!(model.viewport.total_lines(), 10);
}

#[test]
fn test_typing_updates_document_text() {
    let model = update(create_test_model(), Message::MoveToStart);
    let model = update(model, Message::InsertChar('>'));
    assert!(model.document.text().starts_with(">Welcome"));
    assert_eq!(model.document.text(), model.surface.text());
}

#[test]
fn test_backspace_at_start_changes_nothing() {
    let before = create_test_model().document.text().to_string();
    let model = update(create_test_model(), Message::DeleteBack);
    assert_eq!(model.document.text(), before);
    assert_eq!(model.caret_line, 1);
}

#[test]
fn test_backspace_joins_lines_and_updates_caret_line() {
    let model = update(create_test_model(), Message::ClickAt { line: 1, col: 0 });
    assert_eq!(model.caret_line, 2);
    let model = update(model, Message::DeleteBack);
    assert_eq!(model.caret_line, 1);
    assert_eq!(model.document.line_count(), 8);
}

#[test]
fn test_paste_multiline_moves_caret_line() {
    let model = update(
        create_test_model(),
        Message::InsertText("one\ntwo\nthree".to_string()),
    );
    assert_eq!(model.caret_line, 3);
    assert_eq!(model.document.line_count(), 11);
}

#[test]
fn test_scroll_alone_keeps_caret_line() {
    let model = update(create_long_test_model(), Message::ScrollDown(50));
    assert_eq!(model.caret_line, 1);
}

// Gutter sync

#[test]
fn test_scroll_to_120_moves_gutter_to_120() {
    let model = create_long_test_model();
    let model = update(model, Message::ScrollDown(120));
    assert_eq!(model.viewport.offset(), 120);
    assert_eq!(model.gutter.scroll_offset(), 120);
}

#[test]
fn test_scroll_up_keeps_gutter_in_sync() {
    let model = update(create_long_test_model(), Message::ScrollDown(40));
    let model = update(model, Message::ScrollUp(15));
    assert_eq!(model.viewport.offset(), 25);
    assert_eq!(model.gutter.scroll_offset(), 25);
}

#[test]
fn test_caret_past_bottom_scrolls_surface_and_gutter() {
    let model = update(create_long_test_model(), Message::MoveToEnd);
    assert_eq!(model.caret_line, 200);
    assert!(model.viewport.visible_range().contains(&199));
    assert_eq!(model.gutter.scroll_offset(), model.viewport.offset());
}

#[test]
fn test_page_down_moves_caret_and_gutter() {
    let model = create_long_test_model();
    let page = model.viewport.page_len();
    let model = update(model, Message::PageDown);
    assert_eq!(model.viewport.offset(), page);
    assert_eq!(model.gutter.scroll_offset(), page);
    assert_eq!(model.caret_line, page + 1);
}

#[test]
fn test_resize_clamps_offset_and_syncs_gutter() {
    let model = update(create_long_test_model(), Message::ScrollDown(500));
    let model = update(model, Message::Resize(80, 60));
    assert_eq!(model.gutter.scroll_offset(), model.viewport.offset());
    assert_eq!(
        model.viewport.offset(),
        200 - usize::from(model.viewport.height())
    );
}

// File loading

#[test]
fn test_file_loaded_replaces_document_and_resets_caret() {
    let model = update(create_test_model(), Message::ClickAt { line: 6, col: 2 });
    let model = update(model, loaded("notes.txt", "alpha\nbeta\ngamma\ndelta"));
    assert_eq!(model.document.text(), "alpha\nbeta\ngamma\ndelta");
    assert_eq!(model.surface.text(), "alpha\nbeta\ngamma\ndelta");
    assert_eq!(model.document.file_name(), "notes.txt");
    assert_eq!(model.caret_line, 1);
    assert_eq!(model.surface.caret_offset(), 0);
    assert_eq!(model.document.line_count(), 4);
}

#[test]
fn test_file_loaded_shows_success_toast() {
    let model = update(create_test_model(), loaded("notes.txt", "hi"));
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Info);
    assert_eq!(
        message,
        "File loaded successfully: notes.txt has been loaded into the editor"
    );
}

#[test]
fn test_file_loaded_scrolls_back_to_top() {
    let model = update(create_long_test_model(), Message::ScrollDown(120));
    let model = update(model, loaded("short.txt", "one\ntwo"));
    assert_eq!(model.viewport.offset(), 0);
    assert_eq!(model.gutter.scroll_offset(), 0);
}

#[test]
fn test_empty_file_loads_as_one_empty_line() {
    let model = update(create_test_model(), loaded("empty.txt", ""));
    assert_eq!(model.document.text(), "");
    assert_eq!(model.document.line_count(), 1);
    assert_eq!(model.caret_line, 1);
}

#[test]
fn test_read_failure_leaves_document_untouched() {
    let before = create_test_model();
    let model = update(
        create_test_model(),
        Message::FileReadFailed {
            file_name: "gone.txt".to_string(),
            error: "No such file or directory".to_string(),
        },
    );
    assert_eq!(model.document, before.document);
    assert!(model.active_toast().is_none());
}

#[test]
fn test_later_completion_wins() {
    let model = update(create_test_model(), loaded("a.txt", "first"));
    let model = update(model, loaded("b.txt", "second"));
    assert_eq!(model.document.text(), "second");
    assert_eq!(model.document.file_name(), "b.txt");
}

#[test]
fn test_invalid_extension_shows_warning_and_keeps_document() {
    let mut model = create_test_model();
    let before = model.document.clone();
    let mut importer = FileImporter::default();
    let msg = Message::RequestLoad(PathBuf::from("/tmp/readme.md"));
    model = update(model, msg.clone());
    App::handle_message_side_effects(&mut model, &mut importer, &msg);

    assert_eq!(model.document, before);
    assert_eq!(importer.in_flight(), 0);
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Warning);
    assert_eq!(message, "Invalid file type: Please select a .txt file");
}

#[test]
fn test_invalid_extension_warning_names_configured_extension() {
    let mut model = create_test_model();
    let mut importer = FileImporter::new("log");
    let msg = Message::RequestLoad(PathBuf::from("notes.txt"));
    App::handle_message_side_effects(&mut model, &mut importer, &msg);
    let (message, _) = model.active_toast().unwrap();
    assert_eq!(message, "Invalid file type: Please select a .log file");
}

#[test]
fn test_rejected_load_renders_warning_bar() {
    use ratatui::{Terminal, backend::TestBackend};

    let mut model = create_test_model();
    let mut importer = FileImporter::default();
    let msg = Message::RequestLoad(PathBuf::from("photo.png"));
    model = update(model, msg.clone());
    App::handle_message_side_effects(&mut model, &mut importer, &msg);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| crate::ui::render(&model, frame))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let row: String = (0..80).map(|x| buffer[(x, 22)].symbol()).collect();
    assert!(row.starts_with(" [warn] Invalid file type"), "row: {row}");
    assert_eq!(buffer[(1, 22)].bg, model.palette.toast_warning.bg.unwrap());
}

#[test]
fn test_valid_file_loads_through_importer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "from disk\nsecond line\n").unwrap();

    let mut model = create_test_model();
    let mut importer = FileImporter::default();
    let msg = Message::RequestLoad(path);
    App::handle_message_side_effects(&mut model, &mut importer, &msg);
    let outcome = importer.wait().unwrap();
    let model = update(model, Message::from(outcome));

    assert_eq!(model.document.text(), "from disk\nsecond line\n");
    assert_eq!(model.document.file_name(), "notes.txt");
    assert_eq!(model.document.line_count(), 3);
    assert_eq!(model.caret_line, 1);
}

#[test]
fn test_missing_file_fails_silently() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let mut model = create_test_model();
    let before = model.document.clone();
    let mut importer = FileImporter::default();
    App::handle_message_side_effects(&mut model, &mut importer, &Message::RequestLoad(path));
    let outcome = importer.wait().unwrap();
    let model = update(model, Message::from(outcome));

    assert_eq!(model.document, before);
    assert!(model.active_toast().is_none());
}

#[test]
fn test_drain_imports_applies_completed_reads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drained.txt");
    std::fs::write(&path, "drained").unwrap();

    let mut model = create_test_model();
    let mut importer = FileImporter::default();
    App::handle_message_side_effects(&mut model, &mut importer, &Message::RequestLoad(path));

    let deadline = Instant::now() + Duration::from_secs(5);
    while !App::drain_imports(&mut model, &mut importer) {
        assert!(Instant::now() < deadline, "read never completed");
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(model.document.text(), "drained");
}

// Prompt

#[test]
fn test_prompt_open_input_and_cancel() {
    let model = update(create_test_model(), Message::OpenLoadPrompt);
    assert_eq!(model.prompt.as_deref(), Some(""));
    let model = update(model, Message::PromptInput("a.txt".to_string()));
    assert_eq!(model.prompt.as_deref(), Some("a.txt"));
    let model = update(model, Message::CancelPrompt);
    assert!(model.prompt.is_none());
}

#[test]
fn test_prompt_input_ignored_when_closed() {
    let model = update(create_test_model(), Message::PromptInput("x".to_string()));
    assert!(model.prompt.is_none());
}

#[test]
fn test_request_load_closes_prompt() {
    let model = update(create_test_model(), Message::OpenLoadPrompt);
    let model = update(model, Message::RequestLoad(PathBuf::from("a.txt")));
    assert!(model.prompt.is_none());
}

// Key mapping

#[test]
fn test_ctrl_o_opens_prompt() {
    let model = create_test_model();
    assert_eq!(
        App::handle_key(ctrl('o'), &model),
        Some(Message::OpenLoadPrompt)
    );
}

#[test]
fn test_prompt_keys() {
    let model = update(create_test_model(), Message::OpenLoadPrompt);
    let model = update(model, Message::PromptInput("notes.tx".to_string()));
    assert_eq!(
        App::handle_key(key(KeyCode::Char('t')), &model),
        Some(Message::PromptInput("notes.txt".to_string()))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Backspace), &model),
        Some(Message::PromptInput("notes.t".to_string()))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::RequestLoad(PathBuf::from("notes.tx")))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Esc), &model),
        Some(Message::CancelPrompt)
    );
}

#[test]
fn test_enter_on_empty_prompt_cancels() {
    let model = update(create_test_model(), Message::OpenLoadPrompt);
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::CancelPrompt)
    );
}

#[test]
fn test_editing_keys() {
    let model = create_test_model();
    assert_eq!(
        App::handle_key(key(KeyCode::Char('a')), &model),
        Some(Message::InsertChar('a'))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::SplitLine)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Tab), &model),
        Some(Message::InsertChar('\t'))
    );
    assert_eq!(
        App::handle_key(
            KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL),
            &model
        ),
        Some(Message::MoveWordLeft)
    );
    assert_eq!(App::handle_key(ctrl('q'), &model), Some(Message::Quit));
}

#[test]
fn test_key_release_is_ignored() {
    let model = create_test_model();
    let release = KeyEvent::new_with_kind(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    assert_eq!(App::handle_key(release, &model), None);
}

#[test]
fn test_any_key_closes_help() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert!(model.help_visible);
    assert_eq!(
        App::handle_key(key(KeyCode::Char('x')), &model),
        Some(Message::HideHelp)
    );
}

// Mouse mapping

#[test]
fn test_click_in_surface_maps_to_buffer_position() {
    let model = create_test_model();
    // Surface starts at column 6, row 2 in an 80x24 terminal.
    let msg = App::handle_mouse(
        mouse(MouseEventKind::Down(MouseButton::Left), 6, 6),
        &model,
    );
    assert_eq!(msg, Some(Message::ClickAt { line: 4, col: 0 }));
    let model = update(model, msg.unwrap());
    assert_eq!(model.caret_line, 5);
}

#[test]
fn test_click_accounts_for_scroll_offset() {
    let model = update(create_long_test_model(), Message::ScrollDown(120));
    let msg = App::handle_mouse(
        mouse(MouseEventKind::Down(MouseButton::Left), 8, 2),
        &model,
    );
    // 200 lines widen the gutter by one column.
    assert_eq!(msg, Some(Message::ClickAt { line: 120, col: 1 }));
}

#[test]
fn test_click_in_gutter_is_ignored() {
    let model = create_test_model();
    let msg = App::handle_mouse(
        mouse(MouseEventKind::Down(MouseButton::Left), 2, 4),
        &model,
    );
    assert_eq!(msg, None);
}

#[test]
fn test_wheel_over_gutter_scrolls_surface() {
    let model = create_long_test_model();
    let msg = App::handle_mouse(mouse(MouseEventKind::ScrollDown, 2, 5), &model);
    assert_eq!(msg, Some(Message::ScrollDown(3)));
    let model = update(model, msg.unwrap());
    assert_eq!(model.gutter.scroll_offset(), 3);
}

#[test]
fn test_wheel_on_short_document_does_nothing() {
    let model = create_test_model();
    let msg = App::handle_mouse(mouse(MouseEventKind::ScrollDown, 20, 5), &model);
    assert_eq!(msg, None);
}

// Paste

#[test]
fn test_paste_normalizes_line_breaks() {
    let model = create_test_model();
    assert_eq!(
        App::handle_paste("a\r\nb\rc", &model),
        Some(Message::InsertText("a\nb\nc".to_string()))
    );
}

#[test]
fn test_paste_into_prompt_keeps_first_line() {
    let model = update(create_test_model(), Message::OpenLoadPrompt);
    assert_eq!(
        App::handle_paste("/tmp/a.txt\nignored", &model),
        Some(Message::PromptInput("/tmp/a.txt".to_string()))
    );
}

// Toasts

#[test]
fn test_toast_expires() {
    let mut model = update(create_test_model(), loaded("a.txt", "a"));
    assert!(!model.expire_toast(Instant::now()));
    assert!(model.expire_toast(Instant::now() + Duration::from_secs(5)));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}
