//! Error types for timetable-engine operations.
//!
//! Only the I/O and parse boundaries produce errors. Invalid or conflicting
//! slots are never errors: admission records them as
//! [`Rejection`](crate::admission::Rejection) values instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A record line did not split into the four `day;time;course;room` fields.
    /// `line` is 1-based.
    #[error("Malformed record in {source_id} at line {line}: {message}")]
    MalformedRecord {
        source_id: String,
        line: usize,
        message: String,
    },

    /// A source file could not be opened or read.
    #[error("Source unreadable: {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
