//! Two-person scheduling problems read from JSON.
//!
//! Time literals stay strings on the wire and intervals are two-element
//! arrays, so a scenario file reads the way calendars are usually written:
//!
//! ```json
//! {
//!   "person1": { "busy": [["9:00", "10:30"]], "bounds": ["9:00", "20:00"] },
//!   "person2": { "busy": [], "bounds": ["10:00", "18:30"] },
//!   "minimum_duration_minutes": 30
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::{available_meeting_times, available_meeting_times_checked};
use crate::error::{MeetingError, Result};
use crate::freebusy::{free_intervals, free_intervals_checked};
use crate::interval::{Calendar, Interval, Person};
use crate::time::{ParseMode, TimePoint};

/// Minimum meeting length used when a scenario does not give one.
pub const DEFAULT_MINIMUM_DURATION_MINUTES: u32 = 30;

/// Whether calendar invariants are checked before computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Trust the input, never fail.
    #[default]
    Unchecked,
    /// Reject unsorted, overlapping, or out-of-bounds calendars.
    Checked,
}

/// A complete two-person scheduling problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub person1: Person,
    pub person2: Person,
    pub minimum_duration_minutes: u32,
}

#[derive(Serialize, Deserialize)]
struct ScenarioDoc {
    person1: PersonDoc,
    person2: PersonDoc,
    #[serde(default = "default_minimum_duration")]
    minimum_duration_minutes: u32,
}

#[derive(Serialize, Deserialize)]
struct PersonDoc {
    #[serde(default)]
    busy: Vec<(String, String)>,
    bounds: (String, String),
}

fn default_minimum_duration() -> u32 {
    DEFAULT_MINIMUM_DURATION_MINUTES
}

impl PersonDoc {
    fn resolve(&self, mode: ParseMode) -> Result<Person> {
        let busy = self
            .busy
            .iter()
            .map(|(start, end)| Interval::parse_with(start, end, mode))
            .collect::<Result<Calendar>>()?;
        let bounds = Interval::parse_with(&self.bounds.0, &self.bounds.1, mode)?;
        Ok(Person::new(busy, bounds))
    }
}

impl From<&Person> for PersonDoc {
    fn from(p: &Person) -> Self {
        Self {
            busy: p.busy.iter().map(literal_pair).collect(),
            bounds: literal_pair(&p.bounds),
        }
    }
}

fn literal_pair(interval: &Interval) -> (String, String) {
    (interval.start.to_string(), interval.end.to_string())
}

/// Read a single person document (`{"busy": [...], "bounds": [...]}`).
///
/// # Errors
/// Same as [`Scenario::from_json`].
pub fn person_from_json(json: &str, mode: ParseMode) -> Result<Person> {
    let doc: PersonDoc =
        serde_json::from_str(json).map_err(|e| MeetingError::Scenario(e.to_string()))?;
    doc.resolve(mode)
}

impl Scenario {
    pub fn new(person1: Person, person2: Person, minimum_duration_minutes: u32) -> Self {
        Self {
            person1,
            person2,
            minimum_duration_minutes,
        }
    }

    /// Read a scenario document, parsing time literals with `mode`.
    ///
    /// # Errors
    /// - `MeetingError::Scenario` if the JSON does not have the expected shape.
    /// - `MeetingError::Parse` for a bad literal in strict mode.
    /// - `MeetingError::InvariantViolation` for an interval with `start >= end`
    ///   in strict mode.
    pub fn from_json(json: &str, mode: ParseMode) -> Result<Self> {
        let doc: ScenarioDoc =
            serde_json::from_str(json).map_err(|e| MeetingError::Scenario(e.to_string()))?;
        let scenario = Self {
            person1: doc.person1.resolve(mode)?,
            person2: doc.person2.resolve(mode)?,
            minimum_duration_minutes: doc.minimum_duration_minutes,
        };
        debug!(
            ?mode,
            person1_busy = scenario.person1.busy.len(),
            person2_busy = scenario.person2.busy.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Render in the same document format [`Scenario::from_json`] reads.
    pub fn to_json_pretty(&self) -> Result<String> {
        let doc = ScenarioDoc {
            person1: PersonDoc::from(&self.person1),
            person2: PersonDoc::from(&self.person2),
            minimum_duration_minutes: self.minimum_duration_minutes,
        };
        serde_json::to_string_pretty(&doc).map_err(|e| MeetingError::Scenario(e.to_string()))
    }

    /// Two people with a few meetings each, looking for a 30-minute slot.
    ///
    /// Solves to `[(11:30, 12:00), (15:00, 16:00), (18:00, 18:30)]`.
    pub fn example() -> Self {
        Self {
            person1: Person::new(
                Calendar::from(vec![span(9, 0, 10, 30), span(12, 0, 13, 0), span(16, 0, 18, 0)]),
                span(9, 0, 20, 0),
            ),
            person2: Person::new(
                Calendar::from(vec![
                    span(10, 0, 11, 30),
                    span(12, 30, 14, 30),
                    span(14, 30, 15, 0),
                    span(16, 0, 17, 0),
                ]),
                span(10, 0, 18, 30),
            ),
            minimum_duration_minutes: DEFAULT_MINIMUM_DURATION_MINUTES,
        }
    }

    /// Common slots of at least `minimum_duration_minutes`.
    pub fn solve(&self, validation: Validation) -> Result<Calendar> {
        match validation {
            Validation::Unchecked => Ok(available_meeting_times(
                &self.person1,
                &self.person2,
                self.minimum_duration_minutes,
            )),
            Validation::Checked => available_meeting_times_checked(
                &self.person1,
                &self.person2,
                self.minimum_duration_minutes,
            ),
        }
    }

    /// Each person's free intervals, `(person1, person2)`.
    pub fn free_intervals(&self, validation: Validation) -> Result<(Calendar, Calendar)> {
        match validation {
            Validation::Unchecked => Ok((
                free_intervals(&self.person1),
                free_intervals(&self.person2),
            )),
            Validation::Checked => Ok((
                free_intervals_checked(&self.person1)?,
                free_intervals_checked(&self.person2)?,
            )),
        }
    }
}

fn span(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Interval {
    Interval::new_unchecked(
        TimePoint::from_hm(start_h, start_m),
        TimePoint::from_hm(end_h, end_m),
    )
}
