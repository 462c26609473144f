// Event module
// A single timed entry in the weekly schedule

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::time::ClockTime;

/// Block color used when an event does not carry its own
pub const DEFAULT_EVENT_COLOR: &str = "#e0e0e0";

/// A schedule entry with a time span and day memberships.
///
/// `days` lists the day indices whose columns show this event. An index may
/// appear more than once; grouping then places the event in that column once
/// per occurrence. Attributes the widget does not understand are kept in
/// `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    #[serde(default)]
    pub days: Vec<i32>,
    pub start: ClockTime,
    pub end: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Pre-rendered content shown verbatim in place of title and body
    #[serde(
        default,
        rename = "customContent",
        alias = "custom_content",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_content: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ScheduleEvent {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the caller's event list
    /// * `days` - Day indices the event appears on
    /// * `start` - Start time
    /// * `end` - End time, strictly after `start`
    ///
    /// # Examples
    /// ```
    /// use weekly_schedule::models::event::ScheduleEvent;
    /// use weekly_schedule::utils::time::ClockTime;
    ///
    /// let start = ClockTime::parse("10:00").unwrap();
    /// let end = ClockTime::parse("11:00").unwrap();
    /// let event = ScheduleEvent::new("1", vec![0, 2, 4], start, end).unwrap();
    /// assert_eq!(event.duration_minutes(), 60);
    /// ```
    pub fn new(
        id: impl Into<String>,
        days: Vec<i32>,
        start: ClockTime,
        end: ClockTime,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            days,
            start,
            end,
            color: None,
            title: None,
            body: None,
            custom_content: None,
            extra: BTreeMap::new(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        if let Some(ref color) = self.color {
            if parse_hex_color(color).is_none() {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// Length of the event in minutes; zero or negative when the span is inverted
    pub fn duration_minutes(&self) -> i32 {
        i32::from(self.end.minutes()) - i32::from(self.start.minutes())
    }

    /// Whether the event appears on the given day index
    pub fn occurs_on(&self, day_index: i32) -> bool {
        self.days.contains(&day_index)
    }

    /// The event color as RGB, falling back to the default block color
    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb_or(parse_hex_color(DEFAULT_EVENT_COLOR).unwrap_or((224, 224, 224)))
    }

    /// The event color as RGB, or `fallback` when it is missing or invalid
    pub fn rgb_or(&self, fallback: (u8, u8, u8)) -> (u8, u8, u8) {
        self.color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(fallback)
    }

    /// `start - end`, as shown under the title and in the popup
    pub fn time_span_label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// Parse `#RRGGBB` or `#RGB` into RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let expand = |i: usize| -> Option<u8> {
                let v = u8::from_str_radix(&digits[i..i + 1], 16).ok()?;
                Some(v * 17)
            };
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    days: Vec<i32>,
    start: Option<ClockTime>,
    end: Option<ClockTime>,
    color: Option<String>,
    title: Option<String>,
    body: Option<String>,
    custom_content: Option<String>,
    extra: BTreeMap<String, serde_json::Value>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the day indices, replacing any set earlier
    pub fn days(mut self, days: impl IntoIterator<Item = i32>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    pub fn day(mut self, day_index: i32) -> Self {
        self.days.push(day_index);
        self
    }

    pub fn start(mut self, start: ClockTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: ClockTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set start and end from `HH:MM` strings
    pub fn span(mut self, start: &str, end: &str) -> Result<Self, String> {
        self.start = Some(ClockTime::parse(start).map_err(|e| e.to_string())?);
        self.end = Some(ClockTime::parse(end).map_err(|e| e.to_string())?);
        Ok(self)
    }

    /// Set the block color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn custom_content(mut self, content: impl Into<String>) -> Self {
        self.custom_content = Some(content.into());
        self
    }

    /// Attach an extension attribute
    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<ScheduleEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = ScheduleEvent {
            id,
            days: self.days,
            start,
            end,
            color: self.color,
            title: self.title,
            body: self.body,
            custom_content: self.custom_content,
            extra: self.extra,
        };

        event.validate()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn time(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let event = ScheduleEvent::new("1", vec![0, 2, 4], time("10:00"), time("11:00")).unwrap();

        assert_eq!(event.id, "1");
        assert_eq!(event.days, vec![0, 2, 4]);
        assert!(event.title.is_none());
        assert!(event.extra.is_empty());
    }

    #[test]
    fn test_new_event_invalid_times() {
        let result = ScheduleEvent::new("1", vec![0], time("11:00"), time("10:00"));
        assert_eq!(
            result.unwrap_err(),
            "Event end time must be after start time"
        );
    }

    #[test]
    fn test_new_event_equal_times() {
        let result = ScheduleEvent::new("1", vec![0], time("10:00"), time("10:00"));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_event_empty_id() {
        let result = ScheduleEvent::new("  ", vec![0], time("10:00"), time("11:00"));
        assert_eq!(result.unwrap_err(), "Event id cannot be empty");
    }

    #[test]
    fn test_builder_with_optional_fields() {
        let event = ScheduleEvent::builder()
            .id("6")
            .days([1, 3])
            .span("14:00", "15:00")
            .unwrap()
            .color("#99ccff")
            .title("Team Meeting")
            .body("Project Review")
            .extra("room", serde_json::json!("A"))
            .build()
            .unwrap();

        assert_eq!(event.days, vec![1, 3]);
        assert_eq!(event.title.as_deref(), Some("Team Meeting"));
        assert_eq!(event.body.as_deref(), Some("Project Review"));
        assert_eq!(event.extra.get("room"), Some(&serde_json::json!("A")));
        assert_eq!(event.time_span_label(), "14:00 - 15:00");
    }

    #[test]
    fn test_builder_missing_fields() {
        let missing_id = ScheduleEvent::builder()
            .start(time("09:00"))
            .end(time("10:00"))
            .build();
        assert_eq!(missing_id.unwrap_err(), "Event id is required");

        let missing_start = ScheduleEvent::builder().id("x").end(time("10:00")).build();
        assert_eq!(missing_start.unwrap_err(), "Event start time is required");

        let missing_end = ScheduleEvent::builder().id("x").start(time("10:00")).build();
        assert_eq!(missing_end.unwrap_err(), "Event end time is required");
    }

    #[test]
    fn test_builder_rejects_malformed_span() {
        let result = ScheduleEvent::builder().id("x").span("9am", "10:00");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_invalid_color() {
        let mut event = ScheduleEvent::new("1", vec![0], time("10:00"), time("11:00")).unwrap();
        event.color = Some("red".to_string());

        let result = event.validate();
        assert!(result.unwrap_err().contains("hex format"));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF5733"), Some((255, 87, 51)));
        assert_eq!(parse_hex_color("#f57"), Some((255, 85, 119)));
        assert_eq!(parse_hex_color("FF5733"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn test_rgb_falls_back_to_default_color() {
        let mut event = ScheduleEvent::new("1", vec![0], time("10:00"), time("11:00")).unwrap();
        assert_eq!(event.rgb(), (224, 224, 224));

        event.color = Some("#99ff99".to_string());
        assert_eq!(event.rgb(), (153, 255, 153));
    }

    #[test]
    fn test_rgb_or_uses_caller_fallback() {
        let mut event = ScheduleEvent::new("1", vec![0], time("10:00"), time("11:00")).unwrap();
        assert_eq!(event.rgb_or((90, 90, 90)), (90, 90, 90));

        event.color = Some("not-a-color".to_string());
        assert_eq!(event.rgb_or((90, 90, 90)), (90, 90, 90));

        event.color = Some("#123456".to_string());
        assert_eq!(event.rgb_or((90, 90, 90)), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_duration_can_go_negative() {
        let mut event = ScheduleEvent::new("1", vec![0], time("10:00"), time("11:30")).unwrap();
        assert_eq!(event.duration_minutes(), 90);

        event.end = time("09:00");
        assert_eq!(event.duration_minutes(), -60);
    }

    #[test]
    fn test_deserialize_keeps_unknown_fields() {
        let json = r##"{
            "id": "4",
            "days": [0, 2, 4],
            "start": "07:00",
            "end": "08:30",
            "color": "#99ff99",
            "customContent": "Gym",
            "location": "Downtown",
            "priority": 2
        }"##;

        let event: ScheduleEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.custom_content.as_deref(), Some("Gym"));
        assert_eq!(event.extra.len(), 2);
        assert_eq!(event.extra["location"], serde_json::json!("Downtown"));

        let written = serde_json::to_value(&event).unwrap();
        assert_eq!(written["priority"], serde_json::json!(2));
        assert_eq!(written["customContent"], serde_json::json!("Gym"));
    }

    #[test]
    fn test_deserialize_rejects_malformed_time() {
        let json = r#"{"id": "1", "days": [0], "start": "10", "end": "11:00"}"#;
        let result: Result<ScheduleEvent, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
