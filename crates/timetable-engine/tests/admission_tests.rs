//! Tests for batch admission under both policies, and for the registry's
//! first-come-first-served behaviour across batches.

use timetable_engine::admission::ConflictScope;
use timetable_engine::validator::InvalidField;
use timetable_engine::{admit, AdmissionPolicy, Dimension, RejectReason, Slot, Timetable};

fn slot(day: &str, time: &str, course: &str, room: &str, instructor: &str) -> Slot {
    Slot::new(day, time, course, room, instructor)
}

/// Two slots that clash only on the course.
fn course_clash() -> (Slot, Slot) {
    (
        slot("Monday", "08:45", "CS101", "R1", "Alice"),
        slot("Monday", "08:45", "CS101", "R2", "Bob"),
    )
}

fn conflict_dimension(reason: &RejectReason) -> Option<Dimension> {
    match reason {
        RejectReason::Conflict { conflict, .. } => Some(conflict.dimension),
        RejectReason::Invalid(_) => None,
    }
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn invalid_slots_are_rejected_with_their_fields() {
    let batch = vec![
        slot("Funday", "08:45", "CS101", "R1", "Alice"),
        slot("Monday", "07:00", "CS102", "R2", "Alice"),
        slot("Tuesday", "08:45", "CS103", "R3", "Alice"),
    ];

    let admission = admit(batch, &[], AdmissionPolicy::ForwardScan);

    assert_eq!(admission.accepted.len(), 1);
    assert_eq!(admission.accepted[0].course_code, "CS103");
    assert_eq!(admission.rejected.len(), 2);
    assert_eq!(admission.rejected[0].reason, RejectReason::Invalid(vec![InvalidField::Day]));
    assert_eq!(admission.rejected[1].reason, RejectReason::Invalid(vec![InvalidField::Time]));
}

#[test]
fn batch_with_nothing_admissible_is_not_an_error() {
    let batch = vec![
        slot("Funday", "08:45", "CS101", "R1", "Alice"),
        slot("Noday", "99:99", "CS102", "R2", "Alice"),
    ];

    let admission = admit(batch, &[], AdmissionPolicy::ForwardScan);

    assert!(admission.accepted.is_empty());
    assert_eq!(admission.rejected.len(), 2);
}

#[test]
fn empty_batch_admits_nothing() {
    let admission = admit(Vec::new(), &[], AdmissionPolicy::FirstSeen);
    assert!(admission.accepted.is_empty());
    assert!(admission.rejected.is_empty());
}

#[test]
fn every_candidate_ends_up_in_exactly_one_list() {
    let batch = vec![
        slot("Monday", "08:45", "CS101", "R1", "Alice"),
        slot("Monday", "08:45", "CS102", "R2", "Alice"),
        slot("Funday", "08:45", "CS103", "R3", "Alice"),
        slot("Tuesday", "09:45", "CS104", "R4", "Alice"),
    ];

    for policy in [AdmissionPolicy::ForwardScan, AdmissionPolicy::FirstSeen] {
        let admission = admit(batch.clone(), &[], policy);
        assert_eq!(admission.accepted.len() + admission.rejected.len(), batch.len());
    }
}

// ── Intra-batch: forward scan ───────────────────────────────────────────────

#[test]
fn forward_scan_drops_the_earlier_of_a_clashing_pair() {
    let (a, b) = course_clash();

    let admission = admit(vec![a.clone(), b.clone()], &[], AdmissionPolicy::ForwardScan);

    assert_eq!(admission.accepted, vec![b.clone()]);
    assert_eq!(admission.rejected.len(), 1);
    assert_eq!(admission.rejected[0].slot, a);
    match &admission.rejected[0].reason {
        RejectReason::Conflict {
            conflict,
            scope,
            with,
        } => {
            assert_eq!(conflict.dimension, Dimension::Course);
            assert_eq!(*scope, ConflictScope::Batch);
            assert_eq!(with, &b);
        }
        other => panic!("expected a conflict, got {:?}", other),
    }
}

#[test]
fn forward_scan_outcome_depends_on_order() {
    let (a, b) = course_clash();

    let ab = admit(vec![a.clone(), b.clone()], &[], AdmissionPolicy::ForwardScan);
    let ba = admit(vec![b.clone(), a.clone()], &[], AdmissionPolicy::ForwardScan);

    assert_eq!(ab.accepted, vec![b]);
    assert_eq!(ba.accepted, vec![a]);
}

#[test]
fn forward_scan_chain_keeps_only_the_last() {
    // a clashes with b (room), b clashes with c (course), a and c are compatible.
    let a = slot("Monday", "08:45", "CS101", "R1", "Alice");
    let b = slot("Monday", "08:45", "CS102", "R1", "Bob");
    let c = slot("Monday", "08:45", "CS102", "R3", "Carol");

    let admission = admit(vec![a, b, c.clone()], &[], AdmissionPolicy::ForwardScan);

    assert_eq!(admission.accepted, vec![c]);
    let dims: Vec<_> = admission
        .rejected
        .iter()
        .map(|r| conflict_dimension(&r.reason))
        .collect();
    assert_eq!(dims, vec![Some(Dimension::Room), Some(Dimension::Course)]);
}

#[test]
fn one_instructor_cannot_teach_twice_in_one_cell() {
    // A single source file always shares the instructor.
    let batch = vec![
        slot("Monday", "08:45", "CS101", "R1", "Alice"),
        slot("Monday", "08:45", "CS102", "R2", "Alice"),
    ];

    let admission = admit(batch, &[], AdmissionPolicy::ForwardScan);

    assert_eq!(admission.accepted.len(), 1);
    assert_eq!(
        conflict_dimension(&admission.rejected[0].reason),
        Some(Dimension::Instructor)
    );
}

// ── Intra-batch: first seen ─────────────────────────────────────────────────

#[test]
fn first_seen_keeps_the_earlier_of_a_clashing_pair() {
    let (a, b) = course_clash();

    let ab = admit(vec![a.clone(), b.clone()], &[], AdmissionPolicy::FirstSeen);
    let ba = admit(vec![b.clone(), a.clone()], &[], AdmissionPolicy::FirstSeen);

    assert_eq!(ab.accepted, vec![a.clone()]);
    assert_eq!(ab.rejected[0].slot, b);
    assert_eq!(conflict_dimension(&ab.rejected[0].reason), Some(Dimension::Course));

    assert_eq!(ba.accepted, vec![b]);
    assert_eq!(ba.rejected[0].slot, a);
}

#[test]
fn first_seen_only_compares_against_survivors() {
    // a clashes with b, b clashes with c, a and c are compatible:
    // b is dropped for a, so c no longer has anything to clash with.
    let a = slot("Monday", "08:45", "CS101", "R1", "Alice");
    let b = slot("Monday", "08:45", "CS102", "R1", "Bob");
    let c = slot("Monday", "08:45", "CS102", "R3", "Carol");

    let admission = admit(vec![a.clone(), b.clone(), c.clone()], &[], AdmissionPolicy::FirstSeen);

    assert_eq!(admission.accepted, vec![a, c]);
    assert_eq!(admission.rejected.len(), 1);
    assert_eq!(admission.rejected[0].slot, b);
}

#[test]
fn first_seen_ignores_invalid_earlier_candidates() {
    let invalid = slot("Monday", "07:00", "CS101", "R1", "Alice");
    let valid = slot("Monday", "08:45", "CS101", "R1", "Alice");

    let admission = admit(vec![invalid, valid.clone()], &[], AdmissionPolicy::FirstSeen);

    assert_eq!(admission.accepted, vec![valid]);
}

// ── Registry ────────────────────────────────────────────────────────────────

#[test]
fn registry_conflict_is_reported_with_registry_scope() {
    let existing = vec![slot("Monday", "08:45", "CS101", "R1", "Alice")];
    let batch = vec![slot("Monday", "08:45", "CS999", "R1", "Bob")];

    for policy in [AdmissionPolicy::ForwardScan, AdmissionPolicy::FirstSeen] {
        let admission = admit(batch.clone(), &existing, policy);
        assert!(admission.accepted.is_empty());
        match &admission.rejected[0].reason {
            RejectReason::Conflict { scope, with, .. } => {
                assert_eq!(*scope, ConflictScope::Registry);
                assert_eq!(with, &existing[0]);
            }
            other => panic!("expected a conflict, got {:?}", other),
        }
    }
}

#[test]
fn batch_conflict_is_checked_before_registry() {
    let existing = vec![slot("Monday", "08:45", "CS101", "R1", "Alice")];
    let batch = vec![
        slot("Monday", "08:45", "CS200", "R1", "Bob"),
        slot("Monday", "08:45", "CS201", "R2", "Bob"),
    ];

    let admission = admit(batch, &existing, AdmissionPolicy::ForwardScan);

    match &admission.rejected[0].reason {
        RejectReason::Conflict { scope, .. } => assert_eq!(*scope, ConflictScope::Batch),
        other => panic!("expected a conflict, got {:?}", other),
    }
}

#[test]
fn earlier_batch_wins_and_is_never_evicted() {
    let mut timetable = Timetable::new();
    let first = slot("Monday", "08:45", "CS101", "R1", "Alice");

    assert!(timetable.admit(vec![first.clone()]).is_empty());
    let rejected = timetable.admit(vec![slot("Monday", "08:45", "CS101", "R7", "Bob")]);

    assert_eq!(rejected.len(), 1);
    assert_eq!(timetable.slots(), &[first]);
}

#[test]
fn survivors_are_appended_in_batch_order() {
    let mut timetable = Timetable::with_policy(AdmissionPolicy::FirstSeen);
    timetable.admit(vec![slot("Friday", "16:30", "Z1", "R1", "Alice")]);
    timetable.admit(vec![
        slot("Monday", "08:45", "B1", "R2", "Bob"),
        slot("Tuesday", "08:45", "A1", "R2", "Bob"),
    ]);

    let courses: Vec<&str> = timetable.slots().iter().map(|s| s.course_code.as_str()).collect();
    assert_eq!(courses, vec!["Z1", "B1", "A1"]);
}

#[test]
fn rejection_display_names_slot_and_reason() {
    let existing = vec![slot("Monday", "08:45", "CS101", "R1", "Alice")];
    let admission = admit(
        vec![slot("Monday", "08:45", "CS102", "R1", "Bob")],
        &existing,
        AdmissionPolicy::ForwardScan,
    );

    let text = admission.rejected[0].to_string();
    assert!(text.starts_with("Slot [day=Monday, time=08:45, courseCode=CS102"));
    assert!(text.contains("Room is not available: R1"));
    assert!(text.contains("already taken by"));
}

#[test]
fn policy_parses_from_kebab_case() {
    assert_eq!("forward-scan".parse::<AdmissionPolicy>().unwrap(), AdmissionPolicy::ForwardScan);
    assert_eq!("First-Seen".parse::<AdmissionPolicy>().unwrap(), AdmissionPolicy::FirstSeen);
    assert!("random".parse::<AdmissionPolicy>().is_err());
    assert_eq!(AdmissionPolicy::default(), AdmissionPolicy::ForwardScan);
}
