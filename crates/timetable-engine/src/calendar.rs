//! Fixed weekly vocabularies: weekday names and the eight teaching periods.
//!
//! These lists are both the validation vocabulary and the grid axes, so they
//! must not drift: 7 weekdays are accepted on input, the grid shows the first
//! 5, and the 8 periods are matched by their start time.

use chrono::Weekday;
use serde::Serialize;

/// All seven weekdays in calendar order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Grid columns: Monday through Friday.
pub const GRID_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// One teaching period, e.g. `08:45-09:30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: &'static str,
    pub end: &'static str,
}

impl TimeSlot {
    const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    /// Row label in `HH:MM-HH:MM` form.
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Grid rows, in display order. Slots are matched on `start`.
pub const TIME_SLOTS: [TimeSlot; 8] = [
    TimeSlot::new("08:45", "09:30"),
    TimeSlot::new("09:45", "10:30"),
    TimeSlot::new("10:45", "11:30"),
    TimeSlot::new("11:45", "12:30"),
    TimeSlot::new("13:30", "14:15"),
    TimeSlot::new("14:30", "15:15"),
    TimeSlot::new("15:30", "16:15"),
    TimeSlot::new("16:30", "17:15"),
];

/// Canonical English name of a weekday (`Weekday`'s own `Display` gives
/// the three-letter form).
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Case-insensitive lookup of a full weekday name.
///
/// Abbreviations are not accepted, unlike `Weekday`'s `FromStr`.
pub fn parse_day(name: &str) -> Option<Weekday> {
    WEEK.iter()
        .copied()
        .find(|day| day_name(*day).eq_ignore_ascii_case(name))
}

/// Exact, case-sensitive lookup of a period by its start time.
pub fn time_slot_starting_at(start: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|slot| slot.start == start)
}
