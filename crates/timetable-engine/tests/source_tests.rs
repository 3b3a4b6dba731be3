//! Tests for parsing instructor source files into candidate batches.

use std::fs;
use std::path::Path;

use timetable_engine::source::{discover_sources, instructor_from_path, parse_record};
use timetable_engine::{load_batch, parse_batch, ScheduleError};

// ── Instructor label ────────────────────────────────────────────────────────

#[test]
fn instructor_is_file_name_before_first_dot() {
    assert_eq!(instructor_from_path(Path::new("resources/instructors/Alice Smith.txt")), "Alice Smith");
    assert_eq!(instructor_from_path(Path::new("Bob.Jones.txt")), "Bob");
    assert_eq!(instructor_from_path(Path::new("Carol")), "Carol");
}

#[test]
fn hidden_file_falls_back_to_full_name() {
    assert_eq!(instructor_from_path(Path::new("dir/.hidden")), ".hidden");
}

// ── Records ─────────────────────────────────────────────────────────────────

#[test]
fn record_fields_are_taken_verbatim() {
    let slot = parse_record("alice.txt", 1, "monday;08:45;CS101(Lab);Room 1", "Alice").unwrap();

    assert_eq!(slot.day, "monday");
    assert_eq!(slot.time, "08:45");
    assert_eq!(slot.course_code, "CS101(Lab)");
    assert_eq!(slot.room, "Room 1");
    assert_eq!(slot.instructor, "Alice");
}

#[test]
fn trailing_separator_is_ignored() {
    let slot = parse_record("a", 1, "Monday;08:45;CS101;R1;", "Alice").unwrap();
    assert_eq!(slot.room, "R1");
}

#[test]
fn too_few_fields_is_malformed() {
    let err = parse_record("alice.txt", 7, "Monday;08:45;CS101", "Alice").unwrap_err();
    match err {
        ScheduleError::MalformedRecord {
            source_id,
            line,
            message,
        } => {
            assert_eq!(source_id, "alice.txt");
            assert_eq!(line, 7);
            assert!(message.contains("found 3"), "message was {}", message);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn too_many_fields_is_malformed() {
    let err = parse_record("a", 1, "Monday;08:45;CS101;R1;extra", "Alice").unwrap_err();
    assert!(matches!(err, ScheduleError::MalformedRecord { .. }));
}

#[test]
fn empty_field_is_malformed() {
    let err = parse_record("a", 2, "Monday;;CS101;R1", "Alice").unwrap_err();
    assert!(err.to_string().contains("empty time field"), "{}", err);
}

// ── Batches ─────────────────────────────────────────────────────────────────

#[test]
fn batch_keeps_file_order_and_skips_blank_lines() {
    let content = "Monday;08:45;CS101;R1\n\nTuesday;09:45;CS102;R2\n   \n";

    let batch = parse_batch("alice.txt", "Alice", content);

    assert_eq!(batch.slots.len(), 2);
    assert_eq!(batch.slots[0].course_code, "CS101");
    assert_eq!(batch.slots[1].course_code, "CS102");
    assert!(batch.malformed.is_empty());
}

#[test]
fn malformed_line_does_not_stop_the_batch() {
    let content = "Monday;08:45;CS101;R1\ngarbage\nTuesday;09:45;CS102;R2";

    let batch = parse_batch("alice.txt", "Alice", content);

    assert_eq!(batch.slots.len(), 2);
    assert_eq!(batch.malformed.len(), 1);
    assert!(matches!(batch.malformed[0], ScheduleError::MalformedRecord { line: 2, .. }));
}

#[test]
fn crlf_line_endings_are_stripped() {
    let batch = parse_batch("a", "Alice", "Monday;08:45;CS101;R1\r\nTuesday;09:45;CS102;R2\r\n");

    assert_eq!(batch.slots.len(), 2);
    assert_eq!(batch.slots[0].room, "R1");
    assert_eq!(batch.slots[1].room, "R2");
}

// ── Files ───────────────────────────────────────────────────────────────────

#[test]
fn load_batch_derives_instructor_from_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Ada Lovelace.txt");
    fs::write(&path, "Monday;08:45;CS101;R1\n").unwrap();

    let batch = load_batch(&path).unwrap();

    assert_eq!(batch.instructor, "Ada Lovelace");
    assert_eq!(batch.slots[0].instructor, "Ada Lovelace");
    assert_eq!(batch.source_id, path.display().to_string());
}

#[test]
fn missing_file_is_source_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nobody.txt");

    let err = load_batch(&path).unwrap_err();

    match err {
        ScheduleError::SourceUnreadable { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected SourceUnreadable, got {:?}", other),
    }
}

#[test]
fn discover_sources_lists_txt_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "").unwrap();
    fs::write(dir.path().join("a.TXT"), "").unwrap();
    fs::write(dir.path().join("notes.md"), "").unwrap();
    fs::create_dir(dir.path().join("sub.txt")).unwrap();

    let found = discover_sources(dir.path()).unwrap();

    let names: Vec<String> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.TXT", "b.txt"]);
}

#[test]
fn discover_sources_in_missing_dir_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(discover_sources(&dir.path().join("absent")).unwrap().is_empty());
}
