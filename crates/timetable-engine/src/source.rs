//! Reading instructor source files into candidate batches.
//!
//! Each file holds one instructor's proposed slots, one per line:
//!
//! ```text
//! Monday;08:45;CS101(Lab);R1
//! Wednesday;13:30;CS102;B204
//! ```
//!
//! The instructor is not part of the line; it comes from the file name up to
//! its first `.`, so `Alice Smith.txt` proposes slots for `Alice Smith`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};
use crate::slot::Slot;

/// Field separator within a record line.
pub const FIELD_SEPARATOR: char = ';';

/// File extension picked up when scanning an input directory.
pub const SOURCE_EXTENSION: &str = "txt";

const FIELD_NAMES: [&str; 4] = ["day", "time", "courseCode", "room"];

/// The candidates read from one source, in file order.
#[derive(Debug)]
pub struct Batch {
    /// Identifies the source in diagnostics (the path for files).
    pub source_id: String,
    pub instructor: String,
    pub slots: Vec<Slot>,
    /// Lines that could not be parsed, as [`ScheduleError::MalformedRecord`].
    pub malformed: Vec<ScheduleError>,
}

/// Instructor label for a source path: the file name up to its first `.`.
///
/// Falls back to the whole file name when that prefix is empty (`.hidden`).
pub fn instructor_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    match file_name.split('.').next() {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

/// Parse one `day;time;courseCode;room` line.
///
/// Trailing separators are ignored. Anything other than exactly four
/// non-empty fields is a [`ScheduleError::MalformedRecord`]. Field contents are
/// kept verbatim.
pub fn parse_record(source_id: &str, line_no: usize, line: &str, instructor: &str) -> Result<Slot> {
    let malformed = |message: String| ScheduleError::MalformedRecord {
        source_id: source_id.to_string(),
        line: line_no,
        message,
    };

    let fields: Vec<&str> = line
        .trim_end_matches(FIELD_SEPARATOR)
        .split(FIELD_SEPARATOR)
        .collect();
    if fields.len() != FIELD_NAMES.len() {
        return Err(malformed(format!(
            "expected {} fields (day;time;courseCode;room), found {}",
            FIELD_NAMES.len(),
            fields.len()
        )));
    }
    if let Some(pos) = fields.iter().position(|field| field.is_empty()) {
        return Err(malformed(format!("empty {} field", FIELD_NAMES[pos])));
    }

    Ok(Slot::new(fields[0], fields[1], fields[2], fields[3], instructor))
}

/// Parse a whole source. Blank lines are skipped; a malformed line is
/// recorded and parsing continues with the next one.
pub fn parse_batch(source_id: &str, instructor: &str, content: &str) -> Batch {
    let mut batch = Batch {
        source_id: source_id.to_string(),
        instructor: instructor.to_string(),
        slots: Vec::new(),
        malformed: Vec::new(),
    };

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(source_id, index + 1, line, instructor) {
            Ok(slot) => batch.slots.push(slot),
            Err(err) => {
                warn!("{}", err);
                batch.malformed.push(err);
            }
        }
    }

    debug!(
        source = source_id,
        slots = batch.slots.len(),
        malformed = batch.malformed.len(),
        "parsed source"
    );
    batch
}

/// Read and parse one source file.
///
/// # Errors
/// Returns [`ScheduleError::SourceUnreadable`] if the file cannot be read.
pub fn load_batch(path: &Path) -> Result<Batch> {
    let content = fs::read_to_string(path).map_err(|source| ScheduleError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let source_id = path.display().to_string();
    Ok(parse_batch(&source_id, &instructor_from_path(path), &content))
}

/// All `*.txt` files directly inside `dir`, sorted by path.
///
/// A missing directory yields an empty list.
pub fn discover_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_source = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION));
        if is_source {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
