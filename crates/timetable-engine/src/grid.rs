//! Partition accepted slots into the day × period grid.
//!
//! Assembly is destructive: every slot placed into a cell is removed from the
//! source collection, so a slot lands in at most one cell and a second pass
//! over the same collection finds nothing. Slots whose day or time is not on
//! the grid (Saturday, say) are left in the collection untouched.

use std::fmt;

use chrono::Weekday;
use serde::Serialize;

use crate::calendar::{self, TimeSlot};
use crate::slot::Slot;

/// The rendered form of one slot inside a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellEntry {
    pub room: String,
    /// Course code without its parenthetical suffix.
    pub course: String,
    /// Uppercase letters of the instructor name.
    pub instructor: String,
}

impl From<Slot> for CellEntry {
    fn from(slot: Slot) -> Self {
        CellEntry {
            course: slot.short_course().to_string(),
            instructor: slot.instructor_initials(),
            room: slot.room,
        }
    }
}

impl fmt::Display for CellEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}  {}", self.room, self.course, self.instructor)
    }
}

/// One day/period cell. Empty when nothing is scheduled there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cell {
    entries: Vec<CellEntry>,
}

impl Cell {
    pub fn entries(&self) -> &[CellEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in placement order, one per line.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.to_string()).collect()
    }

    /// Entries joined with `\n`; empty string for an empty cell.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// The assembled timetable: `rows[period][day]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    days: Vec<String>,
    time_slots: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Column labels, e.g. `"Monday"`.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Row labels, e.g. `"08:45-09:30"`.
    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(column)
    }

    /// Look a cell up by its day label (case-insensitive) and period start.
    pub fn cell_at(&self, day: &str, start: &str) -> Option<&Cell> {
        let column = self.days.iter().position(|d| d.eq_ignore_ascii_case(day))?;
        let row = self
            .time_slots
            .iter()
            .position(|label| label.split('-').next() == Some(start))?;
        self.cell(row, column)
    }

    /// Total number of placed slots.
    pub fn entry_count(&self) -> usize {
        self.rows.iter().flatten().map(|cell| cell.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

/// Build a grid with one column per `days` entry and one row per
/// `time_slots` entry, moving every matching slot out of `accepted`.
///
/// A slot matches a cell when its day equals the column's weekday name
/// ignoring case and its time equals the row's start time exactly. Slots keep
/// their relative order within a cell.
pub fn assemble(days: &[Weekday], time_slots: &[TimeSlot], accepted: &mut Vec<Slot>) -> Grid {
    let mut rows = Vec::with_capacity(time_slots.len());

    for time_slot in time_slots {
        let mut row = Vec::with_capacity(days.len());
        for day in days {
            let day_name = calendar::day_name(*day);
            let mut cell = Cell::default();
            let mut index = 0;
            while index < accepted.len() {
                let slot = &accepted[index];
                if slot.day.eq_ignore_ascii_case(day_name) && slot.time == time_slot.start {
                    cell.entries.push(CellEntry::from(accepted.remove(index)));
                } else {
                    index += 1;
                }
            }
            row.push(cell);
        }
        rows.push(row);
    }

    Grid {
        days: days.iter().map(|day| calendar::day_name(*day).to_string()).collect(),
        time_slots: time_slots.iter().map(TimeSlot::label).collect(),
        rows,
    }
}
