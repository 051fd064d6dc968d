//! # meeting-engine
//!
//! Find the time slots two people can meet, given their busy calendars, the
//! daily bounds each accepts meetings within, and a minimum meeting duration.
//!
//! Everything is plain interval arithmetic on minutes since midnight: each
//! person's busy calendar is complemented into free intervals, then the two
//! free lists are intersected pairwise and filtered by duration.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_engine::{available_meeting_times, Calendar, Interval, Person};
//!
//! let alice = Person::new(
//!     vec![Interval::parse("9:00", "10:30").unwrap()].into(),
//!     Interval::parse("9:00", "12:00").unwrap(),
//! );
//! let bob = Person::new(Calendar::new(), Interval::parse("10:00", "12:00").unwrap());
//!
//! let slots = available_meeting_times(&alice, &bob, 30);
//! assert_eq!(slots.to_string(), "[(10:30, 12:00)]");
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `TimePoint` and `"H:MM"` parsing (strict or lenient)
//! - [`interval`] — `Interval`, `Calendar`, `Person`, and the `Slot` output record
//! - [`freebusy`] — busy calendar → free intervals within daily bounds
//! - [`availability`] — intersect two persons' free intervals
//! - [`validate`] — opt-in calendar invariant checks
//! - [`scenario`] — JSON scenario input and the built-in example
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod scenario;
pub mod time;
pub mod validate;

pub use availability::{
    available_meeting_times, available_meeting_times_checked, first_available_meeting_time,
    intersect_free_intervals,
};
pub use error::{MeetingError, Violation};
pub use freebusy::{free_intervals, free_intervals_checked};
pub use interval::{Calendar, Interval, Person, Slot};
pub use scenario::{Scenario, Validation};
pub use time::{ParseMode, TimePoint};
