//! Intervals, calendars, and the per-person input record.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::error::{Result, Violation};
use crate::time::{ParseMode, TimePoint};

/// A half-open span of the day, `[start, end)`.
///
/// Built through [`Interval::new`] it always satisfies `start < end`.
/// [`Interval::new_unchecked`] skips that check for callers that want the
/// lenient, never-failing behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl Interval {
    /// Build an interval, rejecting `start >= end`.
    ///
    /// # Errors
    /// Returns `MeetingError::InvariantViolation(Violation::EmptyInterval)`.
    pub fn new(start: TimePoint, end: TimePoint) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(Violation::EmptyInterval { start, end }.into())
        }
    }

    pub const fn new_unchecked(start: TimePoint, end: TimePoint) -> Self {
        Self { start, end }
    }

    /// Parse both ends strictly and build a checked interval.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::parse_with(start, end, ParseMode::Strict)
    }

    /// Parse both ends with `mode`.
    ///
    /// Strict mode also enforces `start < end`; lenient mode builds the
    /// interval unchecked, mirroring its never-fail parsing.
    pub fn parse_with(start: &str, end: &str, mode: ParseMode) -> Result<Self> {
        let start = TimePoint::parse(start, mode)?;
        let end = TimePoint::parse(end, mode)?;
        match mode {
            ParseMode::Strict => Self::new(start, end),
            ParseMode::Lenient => Ok(Self::new_unchecked(start, end)),
        }
    }

    /// Length in minutes. Zero for empty or reversed intervals.
    pub fn duration_minutes(&self) -> u32 {
        self.end.as_minutes().saturating_sub(self.start.as_minutes())
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The non-empty intersection of two intervals.
    ///
    /// Intervals that only touch (`a.end == b.start`) have no overlap.
    pub fn overlap(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Interval { start, end })
    }

    pub fn is_disjoint(&self, other: &Interval) -> bool {
        self.overlap(other).is_none()
    }

    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// An interval with its length, as written to JSON output.
///
/// Times serialize as `H:MM` strings:
/// `{"start": "11:30", "end": "12:00", "duration_minutes": 30}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub start: TimePoint,
    pub end: TimePoint,
    pub duration_minutes: u32,
}

impl From<&Interval> for Slot {
    fn from(i: &Interval) -> Self {
        Self {
            start: i.start,
            end: i.end,
            duration_minutes: i.duration_minutes(),
        }
    }
}

/// An ordered list of intervals.
///
/// A busy calendar is expected to be sorted by start and non-overlapping.
/// Nothing here enforces that; see [`crate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar(Vec<Interval>);

impl Calendar {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Each interval paired with its length, ready for output.
    pub fn slots(&self) -> Vec<Slot> {
        self.0.iter().map(Slot::from).collect()
    }
}

impl Deref for Calendar {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

impl From<Vec<Interval>> for Calendar {
    fn from(intervals: Vec<Interval>) -> Self {
        Self(intervals)
    }
}

impl FromIterator<Interval> for Calendar {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Calendar {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
        }
        write!(f, "]")
    }
}

/// One person's input: their busy calendar and the daily bounds they accept
/// meetings within.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub busy: Calendar,
    pub bounds: Interval,
}

impl Person {
    pub fn new(busy: Calendar, bounds: Interval) -> Self {
        Self { busy, bounds }
    }
}
