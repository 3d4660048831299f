//! Integration tests for the transcript save pipeline

use std::fs;

use termscribe::config::Settings;
use termscribe::transcript::{SaveError, resolve_destination, save_transcript};

#[test]
fn test_save_produces_sanitized_transcript_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let raw = "\x1b]0;zsh\x07\x1b[1m$ cargo test\x1b[0m\r\nrunning 3 tests\r\ntest ok\r\n\x1b>";
    let path = save_transcript(raw, temp_dir.path()).expect("Failed to save transcript");

    assert!(path.starts_with(temp_dir.path()));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    let pattern =
        regex::Regex::new(r"^transcript-\d{4}-\d{2}-\d{2}T\d{2}-\d{2}-\d{2}\.txt$").unwrap();
    assert!(pattern.is_match(&name), "unexpected filename: {name}");

    let written = fs::read_to_string(&path).expect("Failed to read transcript");
    assert_eq!(written, "$ cargo test\nrunning 3 tests\ntest ok\n");
}

#[test]
fn test_save_overwrites_existing_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let first = save_transcript("first capture", temp_dir.path()).expect("first save");
    // Pre-seed the same path with different content; a second save within the
    // same second targets the same filename and must overwrite.
    fs::write(&first, "stale content").expect("Failed to seed file");

    let second = save_transcript("second capture", temp_dir.path()).expect("second save");
    if first == second {
        let written = fs::read_to_string(&second).expect("Failed to read transcript");
        assert_eq!(written, "second capture");
    }
}

#[test]
fn test_empty_capture_leaves_no_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let result = save_transcript("", temp_dir.path());
    assert!(matches!(result, Err(SaveError::EmptyCapture)));

    let entries = fs::read_dir(temp_dir.path()).expect("Failed to list dir").count();
    assert_eq!(entries, 0, "empty capture must not produce a file");
}

#[test]
fn test_write_failure_is_surfaced_with_path() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does-not-exist");

    let result = save_transcript("content", &missing);
    match result {
        Err(SaveError::Write { path, .. }) => assert!(path.starts_with(&missing)),
        other => panic!("expected write error, got {other:?}"),
    }
}

#[test]
fn test_strict_destination_resolution_fails_without_workspace() {
    let settings = Settings {
        desktop_fallback: false,
        ..Settings::default()
    };
    assert!(matches!(
        resolve_destination(None, &settings),
        Err(SaveError::NoDestination)
    ));
}
