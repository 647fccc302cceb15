//! File export against a real filesystem.

use image_to_text::error::WorkflowError;
use image_to_text::export::{write_text, DEFAULT_FILE_NAME};
use tempfile::tempdir;

#[test]
fn exported_file_holds_the_text_verbatim() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(DEFAULT_FILE_NAME);

    write_text(&path, "Hello\nWorld").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Hello\nWorld");
}

#[test]
fn repeated_exports_produce_identical_artifacts() {
    let dir = tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    write_text(&first, "same text").unwrap();
    write_text(&second, "same text").unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn unwritable_path_maps_to_export_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    // A directory component that does not exist makes the write fail.
    let path = dir.path().join("missing").join(DEFAULT_FILE_NAME);

    let err = write_text(&path, "text").unwrap_err();
    assert_eq!(err, WorkflowError::Export);
    assert_eq!(err.to_string(), "Error downloading text");
}
