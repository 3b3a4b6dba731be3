//! The accepted-slot registry.
//!
//! A [`Timetable`] is an ordered, conflict-free list of slots that grows one
//! batch at a time and is drained once by [`Timetable::assemble`]. It is a
//! plain value owned by the caller; independent instances never share state.

use std::path::Path;

use tracing::{info, warn};

use crate::admission::{self, AdmissionPolicy, Rejection};
use crate::calendar::{GRID_DAYS, TIME_SLOTS};
use crate::error::ScheduleError;
use crate::grid::{self, Grid};
use crate::slot::Slot;
use crate::source::{self, Batch};

/// What happened to one source during [`Timetable::load`].
#[derive(Debug)]
pub struct SourceReport {
    pub source_id: String,
    pub instructor: String,
    /// Parsed candidates, before admission.
    pub candidates: usize,
    pub admitted: usize,
    pub rejected: Vec<Rejection>,
    pub malformed: Vec<ScheduleError>,
}

/// Summary of loading a set of sources, in the order they were processed.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub sources: Vec<SourceReport>,
    /// One [`ScheduleError::SourceUnreadable`] per source that contributed
    /// nothing because it could not be read.
    pub unreadable: Vec<ScheduleError>,
}

impl LoadReport {
    pub fn admitted(&self) -> usize {
        self.sources.iter().map(|s| s.admitted).sum()
    }

    pub fn rejected(&self) -> usize {
        self.sources.iter().map(|s| s.rejected.len()).sum()
    }

    pub fn malformed(&self) -> usize {
        self.sources.iter().map(|s| s.malformed.len()).sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Timetable {
    slots: Vec<Slot>,
    policy: AdmissionPolicy,
}

impl Timetable {
    /// An empty registry using the default [`AdmissionPolicy::ForwardScan`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AdmissionPolicy) -> Self {
        Self {
            slots: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> AdmissionPolicy {
        self.policy
    }

    /// Accepted slots in admission order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Admit one batch of candidates and return the rejected ones.
    ///
    /// Survivors are appended in batch order. Slots already in the registry
    /// are never evicted.
    pub fn admit(&mut self, candidates: Vec<Slot>) -> Vec<Rejection> {
        let admission = admission::admit(candidates, &self.slots, self.policy);
        for rejection in &admission.rejected {
            warn!("rejected {}", rejection);
        }
        self.slots.extend(admission.accepted);
        admission.rejected
    }

    /// Admit a parsed source and report on it.
    pub fn admit_batch(&mut self, batch: Batch) -> SourceReport {
        let candidates = batch.slots.len();
        let before = self.slots.len();
        let rejected = self.admit(batch.slots);
        SourceReport {
            source_id: batch.source_id,
            instructor: batch.instructor,
            candidates,
            admitted: self.slots.len() - before,
            rejected,
            malformed: batch.malformed,
        }
    }

    /// Read and admit each source file in order. An unreadable file is
    /// recorded and skipped; the remaining files are still processed.
    pub fn load<P: AsRef<Path>>(&mut self, paths: &[P]) -> LoadReport {
        let mut report = LoadReport::default();
        for path in paths {
            match source::load_batch(path.as_ref()) {
                Ok(batch) => report.sources.push(self.admit_batch(batch)),
                Err(err) => {
                    warn!("{}", err);
                    report.unreadable.push(err);
                }
            }
        }
        info!(
            sources = report.sources.len(),
            admitted = report.admitted(),
            rejected = report.rejected(),
            malformed = report.malformed(),
            unreadable = report.unreadable.len(),
            "sources loaded"
        );
        report
    }

    /// Drain the registry into the Monday–Friday, eight-period grid.
    ///
    /// Placed slots leave the registry. Slots on days outside the grid stay
    /// behind and are reported; calling this again places nothing.
    pub fn assemble(&mut self) -> Grid {
        let grid = grid::assemble(&GRID_DAYS, &TIME_SLOTS, &mut self.slots);
        for slot in &self.slots {
            warn!("{} is outside the timetable grid and was not placed", slot);
        }
        grid
    }
}
