//! WASM bindings for meeting-engine.
//!
//! Exposes free-interval extraction and common-slot search to JavaScript via
//! `wasm-bindgen`. People are passed in and slots come back as JSON strings.
//!
//! A person document looks like:
//!
//! ```json
//! { "busy": [["9:00", "10:30"], ["12:00", "13:00"]], "bounds": ["9:00", "20:00"] }
//! ```
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```

use meeting_engine::scenario::person_from_json;
use meeting_engine::{Calendar, ParseMode, Scenario, Validation};
use wasm_bindgen::prelude::*;

fn to_json(slots: &Calendar) -> Result<String, String> {
    serde_json::to_string(&slots.slots()).map_err(|e| format!("Serialization error: {}", e))
}

fn validation(checked: bool) -> Validation {
    if checked {
        Validation::Checked
    } else {
        Validation::Unchecked
    }
}

// Plain-Rust cores, kept separate from the exports so they run off-wasm too.

fn free_intervals_impl(person_json: &str, checked: bool) -> Result<String, String> {
    let person = person_from_json(person_json, ParseMode::Strict).map_err(|e| e.to_string())?;
    let free = match validation(checked) {
        Validation::Unchecked => meeting_engine::free_intervals(&person),
        Validation::Checked => {
            meeting_engine::free_intervals_checked(&person).map_err(|e| e.to_string())?
        }
    };
    to_json(&free)
}

fn available_meeting_times_impl(
    person1_json: &str,
    person2_json: &str,
    minimum_duration_minutes: u32,
    checked: bool,
) -> Result<String, String> {
    let person1 = person_from_json(person1_json, ParseMode::Strict).map_err(|e| e.to_string())?;
    let person2 = person_from_json(person2_json, ParseMode::Strict).map_err(|e| e.to_string())?;
    let slots = Scenario::new(person1, person2, minimum_duration_minutes)
        .solve(validation(checked))
        .map_err(|e| e.to_string())?;
    to_json(&slots)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Free intervals of one person within their daily bounds.
///
/// Returns a JSON array of `{start, end, duration_minutes}` objects. When
/// `checked` is true, unsorted, overlapping, or out-of-bounds calendars are
/// rejected instead of trusted.
#[wasm_bindgen(js_name = "freeIntervals")]
pub fn free_intervals(person_json: &str, checked: bool) -> Result<String, JsValue> {
    free_intervals_impl(person_json, checked).map_err(|e| JsValue::from_str(&e))
}

/// Slots where both people are free for at least `minimum_duration_minutes`.
///
/// Both people are person documents as JSON strings. Returns a JSON array of
/// `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "availableMeetingTimes")]
pub fn available_meeting_times(
    person1_json: &str,
    person2_json: &str,
    minimum_duration_minutes: u32,
    checked: bool,
) -> Result<String, JsValue> {
    available_meeting_times_impl(person1_json, person2_json, minimum_duration_minutes, checked)
        .map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = r#"{ "busy": [["9:00", "10:30"], ["12:00", "13:00"], ["16:00", "18:00"]],
                            "bounds": ["9:00", "20:00"] }"#;
    const BOB: &str = r#"{ "busy": [["10:00", "11:30"], ["12:30", "14:30"], ["14:30", "15:00"], ["16:00", "17:00"]],
                          "bounds": ["10:00", "18:30"] }"#;

    #[test]
    fn free_intervals_as_json() {
        let json = free_intervals_impl(ALICE, true).unwrap();
        assert_eq!(
            json,
            r#"[{"start":"10:30","end":"12:00","duration_minutes":90},{"start":"13:00","end":"16:00","duration_minutes":180},{"start":"18:00","end":"20:00","duration_minutes":120}]"#
        );
    }

    #[test]
    fn available_meeting_times_as_json() {
        let json = available_meeting_times_impl(ALICE, BOB, 30, false).unwrap();
        let slots: serde_json::Value = serde_json::from_str(&json).unwrap();
        let starts: Vec<&str> = slots
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["start"].as_str().unwrap())
            .collect();
        assert_eq!(starts, vec!["11:30", "15:00", "18:00"]);
    }

    #[test]
    fn bad_literal_is_reported() {
        let err = free_intervals_impl(r#"{ "bounds": ["9:00", "late"] }"#, false).unwrap_err();
        assert!(err.contains("late"), "unexpected error: {err}");
    }

    #[test]
    fn checked_rejects_out_of_bounds_meeting() {
        let person = r#"{ "busy": [["7:00", "8:00"]], "bounds": ["9:00", "17:00"] }"#;
        assert!(free_intervals_impl(person, true).is_err());
        assert!(free_intervals_impl(person, false).is_ok());
    }
}
