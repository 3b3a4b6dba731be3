//! Day/time validation against the fixed calendar vocabularies.
//!
//! - Day: case-insensitive match against the seven full weekday names.
//! - Time: exact match against the eight period start times, no normalization
//!   (`"8:45"` and `"08:45 "` are both invalid).

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::calendar;
use crate::slot::Slot;

/// The dimension of a slot that fell outside its vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvalidField {
    Day,
    Time,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidField::Day => f.write_str("day"),
            InvalidField::Time => f.write_str("time"),
        }
    }
}

pub fn is_valid_day(day: &str) -> bool {
    calendar::parse_day(day).is_some()
}

pub fn is_valid_time(time: &str) -> bool {
    calendar::time_slot_starting_at(time).is_some()
}

/// Every field of `slot` that fails validation, day before time. Empty when
/// the slot is valid. Does not log.
pub fn invalid_fields(slot: &Slot) -> Vec<InvalidField> {
    let mut fields = Vec::new();
    if !is_valid_day(&slot.day) {
        fields.push(InvalidField::Day);
    }
    if !is_valid_time(&slot.time) {
        fields.push(InvalidField::Time);
    }
    fields
}

/// Check a slot's day and time, emitting one warning per failing field.
pub fn is_valid(slot: &Slot) -> bool {
    let fields = invalid_fields(slot);
    for field in &fields {
        let value = match field {
            InvalidField::Day => &slot.day,
            InvalidField::Time => &slot.time,
        };
        warn!(%field, value = %value, "{} is not valid for {}", value, slot);
    }
    fields.is_empty()
}
