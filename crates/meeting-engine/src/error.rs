//! Error types for meeting-engine operations.

use thiserror::Error;

use crate::time::TimePoint;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    #[error("Invalid time literal '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Invariant violation: {0}")]
    InvariantViolation(#[from] Violation),

    #[error("Invalid scenario: {0}")]
    Scenario(String),
}

/// A broken calendar invariant, reported by the checked entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// An interval whose start is not strictly before its end.
    #[error("interval ({start}, {end}) is empty or reversed")]
    EmptyInterval { start: TimePoint, end: TimePoint },

    /// Busy interval at `index` starts before its predecessor.
    #[error("busy interval #{index} starts before the previous one")]
    Unsorted { index: usize },

    /// Busy interval at `index` overlaps its predecessor.
    #[error("busy interval #{index} overlaps the previous one")]
    Overlapping { index: usize },

    /// Busy interval at `index` is not contained in the daily bounds.
    #[error("busy interval #{index} lies outside the daily bounds")]
    OutsideBounds { index: usize },
}

pub type Result<T> = std::result::Result<T, MeetingError>;
