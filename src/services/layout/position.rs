use serde::{Deserialize, Serialize};

use crate::models::event::ScheduleEvent;

/// Vertical placement of an event as percentages (0-100) of the visible range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EventPosition {
    pub top: f32,
    pub height: f32,
}

impl EventPosition {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Place an event within `start_hour..end_hour`.
///
/// Both edges are clamped into the window, so `top + height <= 100` and the
/// height is never negative. An event entirely outside the window collapses
/// to a zero-height sliver on the nearest edge; an inverted span gets zero
/// height at its start.
pub fn compute_position(event: &ScheduleEvent, start_hour: u8, end_hour: u8) -> EventPosition {
    let total_minutes = (f32::from(end_hour) - f32::from(start_hour)) * 60.0;
    if total_minutes <= 0.0 {
        return EventPosition::default();
    }

    let origin = f32::from(start_hour) * 60.0;
    let start_offset = f32::from(event.start.minutes()) - origin;
    let end_offset = f32::from(event.end.minutes()) - origin;

    let top = (start_offset / total_minutes * 100.0).clamp(0.0, 100.0);
    let bottom = (end_offset / total_minutes * 100.0).clamp(0.0, 100.0);
    let height = (bottom - top).clamp(0.0, 100.0 - top);

    EventPosition { top, height }
}
