//! The slot record: one proposed occupancy of a day/time cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single proposed or accepted day/time/course/room/instructor assignment.
///
/// Fields are kept exactly as read. Whether `day` and `time` belong to the
/// fixed vocabularies is decided by the [`validator`](crate::validator), not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: String,
    /// Start time only, e.g. `"08:45"`.
    pub time: String,
    /// Course code, possibly with a parenthetical suffix such as `"CS101(Lab)"`.
    pub course_code: String,
    pub room: String,
    /// Free-form instructor display name.
    pub instructor: String,
}

impl Slot {
    pub fn new(
        day: impl Into<String>,
        time: impl Into<String>,
        course_code: impl Into<String>,
        room: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
            course_code: course_code.into(),
            room: room.into(),
            instructor: instructor.into(),
        }
    }

    /// True when both slots claim the same day and start time.
    ///
    /// Exact string comparison: `"Monday"` and `"monday"` are different days
    /// here.
    pub fn same_cell(&self, other: &Slot) -> bool {
        self.day == other.day && self.time == other.time
    }

    /// Course code up to the first `(`, e.g. `"CS101(Lab)"` -> `"CS101"`.
    pub fn short_course(&self) -> &str {
        self.course_code
            .split('(')
            .next()
            .unwrap_or(&self.course_code)
    }

    /// The uppercase characters of the instructor name, e.g.
    /// `"Alice van Smith"` -> `"AS"`.
    pub fn instructor_initials(&self) -> String {
        self.instructor.chars().filter(|c| c.is_uppercase()).collect()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slot [day={}, time={}, courseCode={}, room={}, instructor={}]",
            self.day, self.time, self.course_code, self.room, self.instructor
        )
    }
}

