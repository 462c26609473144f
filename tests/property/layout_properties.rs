// Property-based tests for the layout engine
// Random event sets must keep the layout invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use proptest::prelude::*;
use weekly_schedule::models::event::ScheduleEvent;
use weekly_schedule::models::header::{default_headers, full_week_headers};
use weekly_schedule::services::layout::{
    compute_position, group_by_day, infer_visible_range, sort_events, ScheduleLayout,
    DEFAULT_VISIBLE_RANGE,
};
use weekly_schedule::services::schedule::ScheduleService;
use weekly_schedule::utils::time::{ClockTime, HourFormat};

fn clock(minutes: u16) -> ClockTime {
    ClockTime::from_minutes(minutes).unwrap()
}

/// Events with `start < end`, days drawn from -1..8 so some fall outside
/// every header
fn event_strategy() -> impl Strategy<Value = ScheduleEvent> {
    (
        "[a-e][0-9]",
        prop::collection::vec(-1i32..8, 0..4),
        0u16..1439,
        1u16..240,
    )
        .prop_map(|(id, days, start, length)| {
            let end = (start + length).min(1440);
            ScheduleEvent::new(id, days, clock(start), clock(end)).unwrap()
        })
}

fn events_strategy() -> impl Strategy<Value = Vec<ScheduleEvent>> {
    prop::collection::vec(event_strategy(), 0..12)
}

proptest! {
    /// Property: the range is a sub-window of the day and never shorter than
    /// the padding threshold unless the day boundary stops it
    #[test]
    fn prop_range_bounds(events in events_strategy()) {
        let range = infer_visible_range(&events);
        prop_assert!(range.start_hour() <= range.end_hour());
        prop_assert!(range.end_hour() <= 24);

        if events.is_empty() {
            prop_assert_eq!(range, DEFAULT_VISIBLE_RANGE);
        } else {
            let earliest = events.iter().map(|e| e.start.minutes()).min().unwrap();
            let latest = events.iter().map(|e| e.end.minutes()).max().unwrap();
            prop_assert!(u16::from(range.start_hour()) * 60 <= earliest);
            prop_assert!(u16::from(range.end_hour()) * 60 >= latest);
            prop_assert!(range.span_hours() >= 2);
        }
    }

    /// Property: every event lands in each configured column it names, once
    /// per occurrence of the day index
    #[test]
    fn prop_grouping_counts(events in events_strategy()) {
        let headers = default_headers();
        let groups = group_by_day(&events, &headers);

        prop_assert_eq!(groups.len(), headers.len());
        for header in &headers {
            let expected: usize = events
                .iter()
                .map(|e| e.days.iter().filter(|d| **d == header.day_index).count())
                .sum();
            prop_assert_eq!(groups.get(header.day_index).unwrap().len(), expected);
        }
        prop_assert!(groups.get(7).is_none());
        prop_assert!(groups.get(-1).is_none());
    }

    /// Property: sorting is ordered, stable and idempotent
    #[test]
    fn prop_sort_stable_and_idempotent(events in events_strategy()) {
        let sorted = sort_events(&events);
        prop_assert_eq!(sorted.len(), events.len());

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start);
        }

        // Ties keep input order
        let index_of = |e: &ScheduleEvent| events.iter().position(|x| std::ptr::eq(x, e)).unwrap();
        for pair in sorted.windows(2) {
            if pair[0].start == pair[1].start {
                prop_assert!(index_of(pair[0]) < index_of(pair[1]));
            }
        }

        let again = sort_events(sorted.iter().copied());
        prop_assert!(again.iter().zip(&sorted).all(|(a, b)| std::ptr::eq(*a, *b)));
    }

    /// Property: positions stay inside the column
    #[test]
    fn prop_position_within_column(
        event in event_strategy(),
        start_hour in 0u8..24,
        span in 0u8..24,
    ) {
        let end_hour = (start_hour + span).min(24);
        let position = compute_position(&event, start_hour, end_hour);
        prop_assert!(position.top >= 0.0);
        prop_assert!(position.height >= 0.0);
        prop_assert!(position.top + position.height <= 100.0 + 1e-3);
    }

    /// Property: a later start never sits higher in the same window
    #[test]
    fn prop_position_monotonic(a in event_strategy(), b in event_strategy()) {
        let range = infer_visible_range([&a, &b]);
        let pa = compute_position(&a, range.start_hour(), range.end_hour());
        let pb = compute_position(&b, range.start_hour(), range.end_hour());
        if a.start <= b.start {
            prop_assert!(pa.top <= pb.top);
        } else {
            prop_assert!(pa.top >= pb.top);
        }
    }

    /// Property: adding then removing a fresh id restores the layout
    #[test]
    fn prop_add_then_remove_round_trip(events in events_strategy(), extra in event_strategy()) {
        let headers = full_week_headers();
        let mut service = ScheduleService::with_events(events);
        let before = service.layout(&headers, HourFormat::TwelveHour).snapshot();

        let mut added = extra;
        added.id = "fresh-id".to_string();
        service.add_event(added);
        prop_assert_eq!(service.remove_event("fresh-id"), 1);

        let after = service.layout(&headers, HourFormat::TwelveHour).snapshot();
        prop_assert_eq!(after, before);
    }

    /// Property: with a range inferred from the events, nothing is clipped
    #[test]
    fn prop_inferred_range_fits_all_events(events in events_strategy()) {
        let headers = full_week_headers();
        let layout = ScheduleLayout::compute(&events, &headers, HourFormat::TwentyFourHour);
        for column in &layout.columns {
            for positioned in &column.events {
                let minutes = positioned.event.duration_minutes() as f32;
                let expected = minutes / layout.range.total_minutes() as f32 * 100.0;
                prop_assert!((positioned.position.height - expected).abs() < 1e-2);
            }
        }
    }
}

#[test]
fn test_fixture_meeting_scenario() {
    let events = fixtures::schedules::single_meeting();
    let range = infer_visible_range(&events);
    assert_eq!((range.start_hour(), range.end_hour()), (9, 12));

    let position = compute_position(&events[0], 8, 14);
    assert!((position.top - 33.33).abs() < 0.01);
    assert!((position.height - 16.67).abs() < 0.01);
}
