//! Opt-in checks for the invariants the extractor assumes of its input.
//!
//! The unchecked entry points trust their input. The `_checked` variants run
//! [`person`] first and surface the first violation found.

use crate::error::{Result, Violation};
use crate::interval::{Interval, Person};

/// Check a person's daily bounds and busy calendar.
///
/// In order, this rejects:
/// - empty or reversed bounds or busy intervals
/// - a busy interval starting before its predecessor
/// - a busy interval overlapping its predecessor (touching is fine)
/// - a busy interval outside the daily bounds
///
/// # Errors
/// Returns `MeetingError::InvariantViolation` with the first offending case.
pub fn person(person: &Person) -> Result<()> {
    non_empty(&person.bounds)?;

    let mut previous: Option<&Interval> = None;
    for (index, busy) in person.busy.iter().enumerate() {
        non_empty(busy)?;
        if let Some(prev) = previous {
            if busy.start < prev.start {
                return Err(Violation::Unsorted { index }.into());
            }
            if busy.start < prev.end {
                return Err(Violation::Overlapping { index }.into());
            }
        }
        if !person.bounds.contains_interval(busy) {
            return Err(Violation::OutsideBounds { index }.into());
        }
        previous = Some(busy);
    }

    Ok(())
}

fn non_empty(interval: &Interval) -> Result<()> {
    if interval.is_empty() {
        return Err(Violation::EmptyInterval {
            start: interval.start,
            end: interval.end,
        }
        .into());
    }
    Ok(())
}
