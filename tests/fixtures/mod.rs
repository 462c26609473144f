// Test fixtures - reusable test data
// Provides consistent schedules across the integration and property tests

#![allow(dead_code)]

use weekly_schedule::models::event::ScheduleEvent;
use weekly_schedule::utils::time::ClockTime;

/// Build an event from `HH:MM` strings
pub fn event(id: &str, days: &[i32], start: &str, end: &str) -> ScheduleEvent {
    ScheduleEvent::new(
        id,
        days.to_vec(),
        ClockTime::parse(start).unwrap(),
        ClockTime::parse(end).unwrap(),
    )
    .unwrap()
}

/// Sample schedules
pub mod schedules {
    use super::*;

    /// Meeting on Mon/Wed/Fri 10:00-11:00
    pub fn single_meeting() -> Vec<ScheduleEvent> {
        vec![event("1", &[0, 2, 4], "10:00", "11:00")]
    }

    /// The work week used by the demo
    pub fn work_week() -> Vec<ScheduleEvent> {
        let mut meeting = event("1", &[0, 2, 4], "10:00", "11:00");
        meeting.color = Some("#ff9999".to_string());
        meeting.custom_content = Some("Team Meeting\nProject Review".to_string());

        let mut lunch = event("2", &[0, 1, 2, 3, 4], "12:00", "13:00");
        lunch.color = Some("#99ccff".to_string());

        let mut review = event("3", &[3], "16:00", "17:30");
        review.color = Some("#ff9999".to_string());

        let mut sync = event("6", &[1, 3], "14:00", "15:00");
        sync.title = Some("Team Meeting".to_string());
        sync.body = Some("Project Review".to_string());

        vec![meeting, lunch, review, sync]
    }

    /// Events on days no default header shows
    pub fn weekend_only() -> Vec<ScheduleEvent> {
        vec![
            event("sat", &[5], "09:00", "10:00"),
            event("sun", &[6], "18:00", "20:00"),
        ]
    }
}

/// Sample JSON documents
pub mod json {
    pub const EVENT_ARRAY: &str = r##"[
        {"id": "1", "days": [0, 2, 4], "start": "10:00", "end": "11:00", "color": "#ff9999"},
        {"id": "2", "days": [1], "start": "09:30", "end": "10:15", "room": "4B"}
    ]"##;

    pub const BAD_TIME: &str = r#"[{"id": "1", "days": [0], "start": "25:00", "end": "26:00"}]"#;
}
