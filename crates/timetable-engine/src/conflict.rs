//! Detect colliding slots.
//!
//! Two slots can only collide when they claim the same day and start time
//! (exact string equality on both). Within such a cell they collide if they
//! share any one of three resources: the course, the instructor, or the room.
//! Each dimension check is symmetric, so the composed predicate is too.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::slot::Slot;

/// A resource two slots in the same cell may not share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    /// The same course offered twice at once.
    Course,
    /// One person booked twice at once.
    Instructor,
    /// One room booked twice at once.
    Room,
}

impl Dimension {
    /// Dimensions in the order they are checked.
    pub const ALL: [Dimension; 3] = [Dimension::Course, Dimension::Instructor, Dimension::Room];

    /// The value of this dimension on `slot`.
    pub fn resource<'a>(&self, slot: &'a Slot) -> &'a str {
        match self {
            Dimension::Course => &slot.course_code,
            Dimension::Instructor => &slot.instructor,
            Dimension::Room => &slot.room,
        }
    }

    /// True if `a` and `b` share this resource in the same day/time cell.
    pub fn collides(&self, a: &Slot, b: &Slot) -> bool {
        a.same_cell(b) && self.resource(a) == self.resource(b)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Course => f.write_str("Course"),
            Dimension::Instructor => f.write_str("Instructor"),
            Dimension::Room => f.write_str("Room"),
        }
    }
}

/// A detected collision: which dimension, and the shared resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub dimension: Dimension,
    pub resource: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not available: {}", self.dimension, self.resource)
    }
}

/// The first dimension on which `a` and `b` collide, checking
/// [`Dimension::ALL`] in order. `None` when the slots are compatible.
///
/// Emits a warning naming the shared resource when a collision is found.
pub fn find_conflict(a: &Slot, b: &Slot) -> Option<Conflict> {
    let dimension = Dimension::ALL.into_iter().find(|d| d.collides(a, b))?;
    let conflict = Conflict {
        dimension,
        resource: dimension.resource(a).to_string(),
    };
    warn!(dimension = %dimension, resource = %conflict.resource, "{} for {}", conflict, a);
    Some(conflict)
}

/// True if `a` and `b` may not both be scheduled.
pub fn conflicts(a: &Slot, b: &Slot) -> bool {
    find_conflict(a, b).is_some()
}
