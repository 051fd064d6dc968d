//! Intersect two people's free time into common meeting slots.
//!
//! Each person's busy calendar is first turned into free intervals (see
//! [`crate::freebusy`]). Every free interval of the first person is then
//! intersected with every free interval of the second, and overlaps shorter
//! than the minimum meeting duration are dropped.

use tracing::debug;

use crate::error::Result;
use crate::freebusy::{free_intervals, free_intervals_checked};
use crate::interval::{Calendar, Interval, Person};

/// All non-empty pairwise overlaps between two free-interval lists.
///
/// Results come in the order of the double iteration: by `free_a`'s order,
/// then `free_b`'s. Touching intervals do not overlap.
pub fn overlap_candidates(free_a: &[Interval], free_b: &[Interval]) -> Vec<Interval> {
    let mut candidates = Vec::new();

    for a in free_a {
        for b in free_b {
            if let Some(overlap) = a.overlap(b) {
                candidates.push(overlap);
            }
        }
    }

    candidates
}

/// Intersect two free-interval lists, keeping overlaps of at least
/// `minimum_duration_minutes` (inclusive).
pub fn intersect_free_intervals(
    free_a: &[Interval],
    free_b: &[Interval],
    minimum_duration_minutes: u32,
) -> Calendar {
    let candidates = overlap_candidates(free_a, free_b);
    let candidate_count = candidates.len();

    let slots: Calendar = candidates
        .into_iter()
        .filter(|c| c.duration_minutes() >= minimum_duration_minutes)
        .collect();

    debug!(
        candidates = candidate_count,
        kept = slots.len(),
        minimum_duration_minutes,
        "filtered overlap candidates"
    );

    slots
}

/// Find every slot where both people are free for at least
/// `minimum_duration_minutes`.
///
/// A minimum of 0 admits every non-empty overlap. If either person has no
/// free time the result is empty.
///
/// # Arguments
///
/// * `person1`, `person2` — Busy calendars and daily bounds. Calendars are
///   trusted to be sorted and non-overlapping.
/// * `minimum_duration_minutes` — Shortest slot worth returning.
pub fn available_meeting_times(
    person1: &Person,
    person2: &Person,
    minimum_duration_minutes: u32,
) -> Calendar {
    let free1 = free_intervals(person1);
    let free2 = free_intervals(person2);
    intersect_free_intervals(&free1, &free2, minimum_duration_minutes)
}

/// Like [`available_meeting_times`], but validates both calendars first.
///
/// # Errors
/// Returns `MeetingError::InvariantViolation` if either person's input breaks
/// a calendar invariant.
pub fn available_meeting_times_checked(
    person1: &Person,
    person2: &Person,
    minimum_duration_minutes: u32,
) -> Result<Calendar> {
    let free1 = free_intervals_checked(person1)?;
    let free2 = free_intervals_checked(person2)?;
    Ok(intersect_free_intervals(
        &free1,
        &free2,
        minimum_duration_minutes,
    ))
}

/// The first common slot of at least `minimum_duration_minutes`, if any.
///
/// "First" follows [`available_meeting_times`] ordering.
pub fn first_available_meeting_time(
    person1: &Person,
    person2: &Person,
    minimum_duration_minutes: u32,
) -> Option<Interval> {
    available_meeting_times(person1, person2, minimum_duration_minutes)
        .into_iter()
        .next()
}
