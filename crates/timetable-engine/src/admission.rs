//! Admission of a batch of candidate slots against the accepted registry.
//!
//! A candidate is admitted when it passes the [`validator`](crate::validator),
//! does not collide with its own batch, and does not collide with any slot
//! admitted earlier. How collisions inside one batch are settled depends on
//! the [`AdmissionPolicy`]. Rejection is never an error: every discarded slot
//! comes back as a [`Rejection`] carrying the reason.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflict::{self, Conflict};
use crate::error::ScheduleError;
use crate::slot::Slot;
use crate::validator::{self, InvalidField};

/// How two colliding candidates from the same batch are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdmissionPolicy {
    /// Each candidate is checked against the candidates *after* it; on a
    /// collision the earlier one is dropped and the later one gets its own
    /// turn.
    #[default]
    ForwardScan,
    /// Each candidate is checked against the candidates *before* it that
    /// survived; on a collision the earlier one is kept.
    FirstSeen,
}

impl fmt::Display for AdmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmissionPolicy::ForwardScan => f.write_str("forward-scan"),
            AdmissionPolicy::FirstSeen => f.write_str("first-seen"),
        }
    }
}

impl FromStr for AdmissionPolicy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward-scan" => Ok(AdmissionPolicy::ForwardScan),
            "first-seen" => Ok(AdmissionPolicy::FirstSeen),
            other => Err(ScheduleError::Config(format!(
                "unknown admission policy '{}' (expected forward-scan or first-seen)",
                other
            ))),
        }
    }
}

/// Where the colliding partner of a rejected slot lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConflictScope {
    /// Another candidate in the same batch.
    Batch,
    /// A slot already in the registry.
    Registry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// Day and/or time outside the fixed vocabularies.
    Invalid(Vec<InvalidField>),
    /// Collides with `with` on one dimension.
    Conflict {
        conflict: Conflict,
        scope: ConflictScope,
        with: Slot,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Invalid(fields) => {
                let names: Vec<String> = fields.iter().map(|field| field.to_string()).collect();
                write!(f, "invalid {}", names.join(" and "))
            }
            RejectReason::Conflict {
                conflict,
                scope: ConflictScope::Batch,
                with,
            } => write!(f, "{} (clashes with {} in the same file)", conflict, with),
            RejectReason::Conflict {
                conflict,
                scope: ConflictScope::Registry,
                with,
            } => write!(f, "{} (already taken by {})", conflict, with),
        }
    }
}

/// A discarded candidate and why it was discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub slot: Slot,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.slot, self.reason)
    }
}

/// The outcome of admitting one batch. Together `accepted` and `rejected`
/// hold every candidate exactly once, each list in batch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Admission {
    pub accepted: Vec<Slot>,
    pub rejected: Vec<Rejection>,
}

/// Decide which candidates of `batch` may join `existing`.
///
/// `existing` is only read; the caller appends `accepted` to it. Candidates
/// are consumed: each ends up in exactly one of the two output lists.
pub fn admit(batch: Vec<Slot>, existing: &[Slot], policy: AdmissionPolicy) -> Admission {
    let mut decisions: Vec<Option<RejectReason>> = Vec::with_capacity(batch.len());

    for (i, slot) in batch.iter().enumerate() {
        let decision = if !validator::is_valid(slot) {
            Some(RejectReason::Invalid(validator::invalid_fields(slot)))
        } else {
            let in_batch = match policy {
                AdmissionPolicy::ForwardScan => {
                    first_conflict(slot, &batch[i + 1..], ConflictScope::Batch)
                }
                AdmissionPolicy::FirstSeen => {
                    let survivors = batch[..i]
                        .iter()
                        .zip(&decisions)
                        .filter(|(_, decision)| decision.is_none())
                        .map(|(earlier, _)| earlier);
                    first_conflict(slot, survivors, ConflictScope::Batch)
                }
            };
            in_batch.or_else(|| first_conflict(slot, existing, ConflictScope::Registry))
        };
        decisions.push(decision);
    }

    let mut admission = Admission::default();
    for (slot, decision) in batch.into_iter().zip(decisions) {
        match decision {
            None => admission.accepted.push(slot),
            Some(reason) => admission.rejected.push(Rejection { slot, reason }),
        }
    }

    debug!(
        %policy,
        accepted = admission.accepted.len(),
        rejected = admission.rejected.len(),
        "batch admitted"
    );
    admission
}

fn first_conflict<'a>(
    slot: &Slot,
    others: impl IntoIterator<Item = &'a Slot>,
    scope: ConflictScope,
) -> Option<RejectReason> {
    others.into_iter().find_map(|other| {
        conflict::find_conflict(slot, other).map(|conflict| RejectReason::Conflict {
            conflict,
            scope,
            with: other.clone(),
        })
    })
}
