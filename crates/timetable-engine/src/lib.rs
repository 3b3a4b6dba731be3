//! # timetable-engine
//!
//! Builds a conflict-free weekly timetable from per-instructor slot records.
//!
//! Candidate slots are read one source file at a time, checked against the
//! fixed day and period vocabularies, and admitted first-come-first-served:
//! a slot that would double-book a course, an instructor, or a room in the
//! same day/time cell is rejected and reported, never scheduled. The accepted
//! slots are then partitioned into a Monday–Friday × eight-period grid and
//! rendered to a document.
//!
//! ## Quick start
//!
//! ```rust
//! use timetable_engine::{Slot, Timetable};
//!
//! let mut timetable = Timetable::new();
//! let rejected = timetable.admit(vec![
//!     Slot::new("Monday", "08:45", "CS101(Lab)", "R1", "Alice Smith"),
//!     Slot::new("Monday", "08:45", "CS102", "R2", "Bob Jones"),
//! ]);
//! assert!(rejected.is_empty());
//!
//! let grid = timetable.assemble();
//! let cell = grid.cell_at("Monday", "08:45").unwrap();
//! assert_eq!(cell.text(), "R1  CS101  AS\nR2  CS102  BJ");
//! assert!(timetable.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`slot`] — the slot record
//! - [`calendar`] — fixed weekday and period vocabularies
//! - [`validator`] — day/time membership checks
//! - [`conflict`] — course / instructor / room collision detection
//! - [`admission`] — batch admission policies and rejection reports
//! - [`timetable`] — the accepted-slot registry
//! - [`grid`] — destructive partition of the registry into the weekly grid
//! - [`source`] — reading instructor files into candidate batches
//! - [`render`] — CSV, JSON, Markdown and plain-text documents
//! - [`session`] — select sources, export documents
//! - [`config`] — TOML run configuration
//! - [`error`] — Error types

pub mod admission;
pub mod calendar;
pub mod config;
pub mod conflict;
pub mod error;
pub mod grid;
pub mod render;
pub mod session;
pub mod slot;
pub mod source;
pub mod timetable;
pub mod validator;

pub use admission::{admit, Admission, AdmissionPolicy, RejectReason, Rejection};
pub use config::Config;
pub use conflict::{conflicts, find_conflict, Conflict, Dimension};
pub use error::ScheduleError;
pub use grid::{assemble, Cell, CellEntry, Grid};
pub use render::{OutputFormat, Renderer};
pub use session::Session;
pub use slot::Slot;
pub use source::{load_batch, parse_batch, Batch};
pub use timetable::{LoadReport, SourceReport, Timetable};
pub use validator::is_valid;
