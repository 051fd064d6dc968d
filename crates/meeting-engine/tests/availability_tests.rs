//! Tests for intersecting two persons' free time.

use meeting_engine::availability::overlap_candidates;
use meeting_engine::{
    available_meeting_times, available_meeting_times_checked, first_available_meeting_time,
    intersect_free_intervals, Calendar, Interval, MeetingError, Person, Slot, TimePoint, Violation,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn iv(start: &str, end: &str) -> Interval {
    Interval::parse(start, end).unwrap()
}

fn person(busy: &[(&str, &str)], bounds: (&str, &str)) -> Person {
    Person::new(
        busy.iter().map(|(s, e)| iv(s, e)).collect(),
        iv(bounds.0, bounds.1),
    )
}

fn example_people() -> (Person, Person) {
    (
        person(
            &[("9:00", "10:30"), ("12:00", "13:00"), ("16:00", "18:00")],
            ("9:00", "20:00"),
        ),
        person(
            &[
                ("10:00", "11:30"),
                ("12:30", "14:30"),
                ("14:30", "15:00"),
                ("16:00", "17:00"),
            ],
            ("10:00", "18:30"),
        ),
    )
}

// ── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn two_calendars_thirty_minute_minimum() {
    let (p1, p2) = example_people();

    let slots = available_meeting_times(&p1, &p2, 30);

    assert_eq!(
        slots.to_vec(),
        vec![
            iv("11:30", "12:00"),
            iv("15:00", "16:00"),
            iv("18:00", "18:30")
        ]
    );
}

#[test]
fn identical_bounds_no_meetings_returns_the_bounds() {
    let p1 = person(&[], ("9:00", "17:00"));
    let p2 = person(&[], ("9:00", "17:00"));

    let slots = available_meeting_times(&p1, &p2, 60);

    assert_eq!(slots.to_vec(), vec![iv("9:00", "17:00")]);
}

#[test]
fn identical_bounds_shorter_than_minimum_returns_nothing() {
    let p1 = person(&[], ("9:00", "9:20"));
    let p2 = person(&[], ("9:00", "9:20"));

    assert!(available_meeting_times(&p1, &p2, 30).is_empty());
}

#[test]
fn minimum_longer_than_any_overlap_returns_nothing() {
    let (p1, p2) = example_people();

    // Longest overlap in the example is 15:00-16:00.
    let slots = available_meeting_times(&p1, &p2, 61);

    assert!(slots.is_empty());
}

#[test]
fn minimum_threshold_is_inclusive() {
    // Overlap is exactly 10:00-10:45 = 45 minutes.
    let p1 = person(&[], ("9:00", "10:45"));
    let p2 = person(&[], ("10:00", "12:00"));

    assert_eq!(
        available_meeting_times(&p1, &p2, 45).to_vec(),
        vec![iv("10:00", "10:45")]
    );
    assert!(available_meeting_times(&p1, &p2, 46).is_empty());
}

#[test]
fn one_minute_short_is_excluded() {
    // 44-minute overlap against a 45-minute minimum.
    let p1 = person(&[], ("9:00", "10:44"));
    let p2 = person(&[], ("10:00", "12:00"));

    assert!(available_meeting_times(&p1, &p2, 45).is_empty());
    assert_eq!(available_meeting_times(&p1, &p2, 44).len(), 1);
}

#[test]
fn zero_minimum_keeps_every_overlap() {
    let (p1, p2) = example_people();

    let slots = available_meeting_times(&p1, &p2, 0);

    // Same three overlaps; none is shorter than 30 minutes anyway.
    assert_eq!(slots.len(), 3);
}

#[test]
fn zero_minimum_keeps_one_minute_overlap() {
    let p1 = person(&[], ("9:00", "10:01"));
    let p2 = person(&[], ("10:00", "11:00"));

    assert_eq!(
        available_meeting_times(&p1, &p2, 0).to_vec(),
        vec![iv("10:00", "10:01")]
    );
}

#[test]
fn no_free_time_for_one_person_means_no_slots() {
    let busy = person(&[("9:00", "17:00")], ("9:00", "17:00"));
    let free = person(&[], ("8:00", "18:00"));

    assert!(available_meeting_times(&busy, &free, 0).is_empty());
    assert!(available_meeting_times(&free, &busy, 0).is_empty());
}

#[test]
fn disjoint_bounds_never_meet() {
    let morning = person(&[], ("8:00", "12:00"));
    let afternoon = person(&[], ("12:00", "17:00"));

    // Touching at 12:00 is not an overlap.
    assert!(available_meeting_times(&morning, &afternoon, 0).is_empty());
}

#[test]
fn order_follows_first_person_then_second() {
    // p1 free: 9-12 and 13-17. p2 free: 10-11, 11:30-14, 15-16.
    let p1 = person(&[("12:00", "13:00")], ("9:00", "17:00"));
    let p2 = person(
        &[("11:00", "11:30"), ("14:00", "15:00")],
        ("10:00", "16:00"),
    );

    let slots = available_meeting_times(&p1, &p2, 0);

    assert_eq!(
        slots.to_vec(),
        vec![
            iv("10:00", "11:00"),
            iv("11:30", "12:00"),
            iv("13:00", "14:00"),
            iv("15:00", "16:00"),
        ]
    );
}

// ── Building blocks ─────────────────────────────────────────────────────────

#[test]
fn overlap_candidates_skip_empty_intersections() {
    let a = vec![iv("9:00", "10:00"), iv("11:00", "12:00")];
    let b = vec![iv("9:30", "11:30")];

    let candidates = overlap_candidates(&a, &b);

    assert_eq!(candidates, vec![iv("9:30", "10:00"), iv("11:00", "11:30")]);
}

#[test]
fn intersect_free_intervals_filters_by_duration() {
    let a = vec![iv("9:00", "10:00"), iv("11:00", "12:00")];
    let b = vec![iv("9:50", "11:30")];

    let slots: Calendar = intersect_free_intervals(&a, &b, 15);

    // 9:50-10:00 is only 10 minutes.
    assert_eq!(slots.to_vec(), vec![iv("11:00", "11:30")]);
}

#[test]
fn first_available_meeting_time_returns_earliest_in_order() {
    let (p1, p2) = example_people();

    assert_eq!(
        first_available_meeting_time(&p1, &p2, 30),
        Some(iv("11:30", "12:00"))
    );
    assert_eq!(
        first_available_meeting_time(&p1, &p2, 60),
        Some(iv("15:00", "16:00"))
    );
    assert_eq!(first_available_meeting_time(&p1, &p2, 90), None);
}

// ── Checked variant ─────────────────────────────────────────────────────────

#[test]
fn checked_matches_unchecked_on_valid_input() {
    let (p1, p2) = example_people();

    assert_eq!(
        available_meeting_times_checked(&p1, &p2, 30).unwrap(),
        available_meeting_times(&p1, &p2, 30)
    );
}

#[test]
fn checked_reports_overlapping_calendar() {
    let (p1, _) = example_people();
    let overlapping = person(&[("10:00", "11:00"), ("10:30", "12:00")], ("9:00", "17:00"));

    let err = available_meeting_times_checked(&p1, &overlapping, 30).unwrap_err();

    assert_eq!(
        err,
        MeetingError::InvariantViolation(Violation::Overlapping { index: 1 })
    );
}

#[test]
fn checked_reports_meeting_outside_bounds() {
    let (p1, _) = example_people();
    let early = person(&[("7:00", "8:00")], ("9:00", "17:00"));

    let err = available_meeting_times_checked(&early, &p1, 30).unwrap_err();

    assert_eq!(
        err,
        MeetingError::InvariantViolation(Violation::OutsideBounds { index: 0 })
    );
}

// ── Output records ──────────────────────────────────────────────────────────

#[test]
fn slots_carry_duration_and_serialize_as_literals() {
    let (p1, p2) = example_people();

    let slots = available_meeting_times(&p1, &p2, 30).slots();

    assert_eq!(
        slots[1],
        Slot {
            start: TimePoint::from_hm(15, 0),
            end: TimePoint::from_hm(16, 0),
            duration_minutes: 60,
        }
    );
    assert_eq!(
        serde_json::to_string(&slots[0]).unwrap(),
        r#"{"start":"11:30","end":"12:00","duration_minutes":30}"#
    );
}
