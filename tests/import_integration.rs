use std::path::Path;
use std::time::{Duration, Instant};

use linepad::import::{FileImporter, ImportError, ImportOutcome};
use linepad::prelude::*;

fn wait_for(importer: &mut FileImporter, count: usize) -> Vec<ImportOutcome> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut done = Vec::new();
    while done.len() < count {
        done.extend(importer.poll());
        assert!(Instant::now() < deadline, "reads never completed");
        std::thread::sleep(Duration::from_millis(5));
    }
    done
}

#[test]
fn test_loaded_file_replaces_seed_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("story.txt");
    std::fs::write(&path, "once\nupon\na time").unwrap();

    let mut importer = FileImporter::default();
    importer.request(&path).unwrap();
    let outcome = importer.wait().unwrap();

    let model = linepad::app::update(Model::default(), Message::from(outcome));
    assert_eq!(model.document.text(), "once\nupon\na time");
    assert_eq!(model.document.file_name(), "story.txt");
    assert_eq!(model.document.line_count(), 3);
    assert_eq!(model.caret_line, 1);
    assert_eq!(model.gutter.scroll_offset(), 0);
}

#[test]
fn test_rejected_name_never_spawns_a_read() {
    let mut importer = FileImporter::default();
    let err = importer.request(Path::new("photo.png")).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedExtension { .. }));
    assert_eq!(importer.in_flight(), 0);
    assert!(importer.wait().is_none());
}

#[test]
fn test_concurrent_reads_all_complete_with_distinct_tickets() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    std::fs::write(&first, "first").unwrap();
    std::fs::write(&second, "second").unwrap();

    let mut importer = FileImporter::default();
    let a = importer.request(&first).unwrap();
    let b = importer.request(&second).unwrap();
    assert_ne!(a, b);
    assert_eq!(importer.in_flight(), 2);

    let outcomes = wait_for(&mut importer, 2);
    assert_eq!(importer.in_flight(), 0);

    // Whatever order they finish in, the last one applied is what remains.
    let mut model = Model::default();
    let mut last_text = String::new();
    for outcome in outcomes {
        if let ImportOutcome::Loaded { text, .. } = &outcome {
            last_text.clone_from(text);
        }
        model = linepad::app::update(model, Message::from(outcome));
    }
    assert_eq!(model.document.text(), last_text);
}

#[test]
fn test_unreadable_path_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    // A directory named like a text file passes the name check but
    // cannot be read as a file.
    let path = dir.path().join("folder.txt");
    std::fs::create_dir(&path).unwrap();

    let mut importer = FileImporter::default();
    importer.request(&path).unwrap();
    let outcome = importer.wait().unwrap();
    assert!(matches!(outcome, ImportOutcome::Failed { .. }));

    let before = Model::default();
    let model = linepad::app::update(Model::default(), Message::from(outcome));
    assert_eq!(model.document, before.document);
    assert!(model.active_toast().is_none());
}
