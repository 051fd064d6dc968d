//! Time-of-day points and `"H:MM"` literal parsing.
//!
//! A [`TimePoint`] is a count of minutes since midnight. Literals are 24-hour
//! `"H:MM"` or `"HH:MM"` strings with no seconds.
//!
//! Two parse modes are offered:
//!
//! - [`ParseMode::Strict`] rejects anything that is not a valid clock time.
//! - [`ParseMode::Lenient`] never fails: every hour or minute component that is
//!   missing or not an integer counts as 0, so `"abc"` reads as `0:00` and
//!   `"9:xx"` as `9:00`. Out-of-range values (`"25:90"`) are kept as plain
//!   arithmetic, saturating at `u32::MAX` minutes.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MeetingError, Result};

const MINUTES_PER_HOUR: u32 = 60;

/// How time literals are turned into [`TimePoint`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Fail with [`MeetingError::Parse`] on anything but a valid `H:MM` time.
    #[default]
    Strict,
    /// Default unparsable components to zero; never fails.
    Lenient,
}

/// A point in the day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimePoint(u32);

impl TimePoint {
    /// Midnight, `0:00`.
    pub const MIDNIGHT: TimePoint = TimePoint(0);

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Saturates at `u32::MAX` minutes instead of overflowing.
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours.saturating_mul(MINUTES_PER_HOUR).saturating_add(minutes))
    }

    /// Total minutes since midnight.
    pub const fn as_minutes(self) -> u32 {
        self.0
    }

    pub const fn hours(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub const fn minutes(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Parse a literal with the given mode.
    pub fn parse(input: &str, mode: ParseMode) -> Result<Self> {
        match mode {
            ParseMode::Strict => Self::parse_strict(input),
            ParseMode::Lenient => Ok(Self::parse_lenient(input)),
        }
    }

    /// Parse a 24-hour `H:MM` / `HH:MM` literal.
    ///
    /// # Errors
    /// Returns `MeetingError::Parse` when the input is not a valid time of day.
    pub fn parse_strict(input: &str) -> Result<Self> {
        if !is_clock_literal(input) {
            return Err(MeetingError::Parse {
                input: input.to_string(),
                reason: "expected H:MM or HH:MM".to_string(),
            });
        }
        NaiveTime::parse_from_str(input, "%H:%M")
            .map(Self::from)
            .map_err(|e| MeetingError::Parse {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parse a literal, treating every missing or non-integer component as 0.
    pub fn parse_lenient(input: &str) -> Self {
        let mut parts = input.split(':');
        let mut component = || {
            parts
                .next()
                .and_then(|p| p.parse::<u32>().ok())
                .unwrap_or(0)
        };
        let hours = component();
        let minutes = component();
        Self::from_hm(hours, minutes)
    }

    /// The equivalent clock time, if this point lies within a single day.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hours(), self.minutes(), 0)
    }
}

/// One or two hour digits, a colon, exactly two minute digits.
fn is_clock_literal(input: &str) -> bool {
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match input.split_once(':') {
        Some((h, m)) => (1..=2).contains(&h.len()) && m.len() == 2 && digits(h) && digits(m),
        None => false,
    }
}

impl From<NaiveTime> for TimePoint {
    fn from(t: NaiveTime) -> Self {
        Self::from_hm(t.hour(), t.minute())
    }
}

impl FromStr for TimePoint {
    type Err = MeetingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_strict(s)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours(), self.minutes())
    }
}

impl Serialize for TimePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
