//! Compute a person's free intervals from their busy calendar.
//!
//! The busy calendar is taken as given: sorted by start, non-overlapping, and
//! inside the daily bounds. Free intervals are the gaps before the first
//! meeting, between consecutive meetings, and after the last one, all within
//! the daily bounds.

use tracing::{debug, trace};

use crate::error::Result;
use crate::interval::{Calendar, Interval, Person};
use crate::validate;

/// Find the free intervals of `person` within their daily bounds.
///
/// An empty busy calendar leaves the whole bounds free. Meetings that touch
/// (`left.end == right.start`) leave no gap between them.
///
/// No checks are made on the busy calendar; an unsorted or overlapping one
/// yields a meaningless but well-formed result. Use
/// [`free_intervals_checked`] to reject such input.
pub fn free_intervals(person: &Person) -> Calendar {
    let bounds = person.bounds;
    let (Some(first), Some(last)) = (person.busy.first(), person.busy.last()) else {
        return Calendar::from(vec![bounds]);
    };

    let mut free = Vec::with_capacity(person.busy.len() + 1);

    // Leading gap between the start of the day and the first meeting.
    if bounds.start < first.start {
        free.push(Interval::new_unchecked(bounds.start, first.start));
    }

    for pair in person.busy.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if left.end < right.start {
            free.push(Interval::new_unchecked(left.end, right.start));
        }
    }

    // Trailing gap after the last meeting.
    if last.end < bounds.end {
        free.push(Interval::new_unchecked(last.end, bounds.end));
    }

    for interval in &free {
        trace!(%interval, "free interval");
    }
    debug!(
        busy = person.busy.len(),
        free = free.len(),
        "extracted free intervals"
    );

    Calendar::from(free)
}

/// Like [`free_intervals`], but first checks the person's calendar invariants.
///
/// # Errors
/// Returns `MeetingError::InvariantViolation` describing the first broken
/// invariant found by [`validate::person`].
pub fn free_intervals_checked(person: &Person) -> Result<Calendar> {
    validate::person(person)?;
    Ok(free_intervals(person))
}
