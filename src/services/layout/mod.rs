//! Layout engine for the weekly schedule.
//!
//! Turns the current event list and the configured day headers into a visible
//! hour window, per-day ordered event lists and a vertical position for every
//! event block. Everything here is a pure function of its inputs and is
//! recomputed on each pass; nothing is cached between passes.

mod geometry;
mod grouping;
mod position;
mod range;

pub use geometry::{GridGeometry, GridMetrics, PixelRect};
pub use grouping::{group_by_day, DayGroups};
pub use position::{compute_position, EventPosition};
pub use range::{
    infer_visible_range, VisibleRange, DEFAULT_VISIBLE_RANGE, MIN_VISIBLE_SPAN_HOURS,
};

use serde::{Deserialize, Serialize};

use crate::models::event::{parse_hex_color, ScheduleEvent, DEFAULT_EVENT_COLOR};
use crate::models::header::DayHeader;
use crate::utils::time::{format_hour, HourFormat};

/// Order events by start time without touching the input.
///
/// The sort is stable: events starting at the same minute keep their input
/// order.
pub fn sort_events<'a, I>(events: I) -> Vec<&'a ScheduleEvent>
where
    I: IntoIterator<Item = &'a ScheduleEvent>,
{
    let mut sorted: Vec<&ScheduleEvent> = events.into_iter().collect();
    sorted.sort_by_key(|event| event.start);
    sorted
}

/// A labelled hour on the time axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourLabel {
    pub hour: u8,
    pub label: String,
}

/// An event block ready to paint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedEvent<'a> {
    pub event: &'a ScheduleEvent,
    pub position: EventPosition,
}

/// One header's column
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn<'a> {
    pub header: &'a DayHeader,
    /// Paint order: ascending start time
    pub events: Vec<PositionedEvent<'a>>,
}

/// Result of one layout pass over a consistent snapshot of the events
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleLayout<'a> {
    pub range: VisibleRange,
    pub hour_labels: Vec<HourLabel>,
    /// Offsets (percent) of the horizontal hour lines, both edges included
    pub grid_lines: Vec<f32>,
    pub columns: Vec<DayColumn<'a>>,
    pub is_empty: bool,
}

impl<'a> ScheduleLayout<'a> {
    /// Run the whole pipeline: infer range, sort, group, position.
    pub fn compute(
        events: &'a [ScheduleEvent],
        headers: &'a [DayHeader],
        hour_format: HourFormat,
    ) -> Self {
        let range = infer_visible_range(events);
        Self::compute_with_range(events, headers, range, hour_format)
    }

    /// Same as [`ScheduleLayout::compute`] but with a caller-supplied window.
    /// Events outside the window are clamped to its edges.
    pub fn compute_with_range(
        events: &'a [ScheduleEvent],
        headers: &'a [DayHeader],
        range: VisibleRange,
        hour_format: HourFormat,
    ) -> Self {
        let sorted = sort_events(events);
        let groups = group_by_day(sorted, headers);

        let columns = headers
            .iter()
            .map(|header| DayColumn {
                header,
                events: groups
                    .get(header.day_index)
                    .unwrap_or_default()
                    .iter()
                    .map(|&event| PositionedEvent {
                        event,
                        position: compute_position(event, range.start_hour(), range.end_hour()),
                    })
                    .collect(),
            })
            .collect();

        log::debug!(
            "Computed schedule layout: {} events, {} columns, hours {}-{}",
            events.len(),
            headers.len(),
            range.start_hour(),
            range.end_hour()
        );

        Self {
            range,
            hour_labels: hour_labels(range, hour_format),
            grid_lines: grid_lines(range),
            columns,
            is_empty: events.is_empty(),
        }
    }

    pub fn column(&self, day_index: i32) -> Option<&DayColumn<'a>> {
        self.columns
            .iter()
            .find(|column| column.header.day_index == day_index)
    }

    /// Detach the layout from the event list so it can cross threads.
    /// Uncolored events get the light default block color.
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.snapshot_with_fallback(
            parse_hex_color(DEFAULT_EVENT_COLOR).unwrap_or((224, 224, 224)),
        )
    }

    /// Like [`ScheduleLayout::snapshot`], painting events without a usable
    /// color in `default_rgb`
    pub fn snapshot_with_fallback(&self, default_rgb: (u8, u8, u8)) -> LayoutSnapshot {
        LayoutSnapshot {
            range: self.range,
            hour_labels: self.hour_labels.clone(),
            grid_lines: self.grid_lines.clone(),
            columns: self
                .columns
                .iter()
                .map(|column| SnapshotColumn {
                    label: column.header.label.clone(),
                    day_index: column.header.day_index,
                    blocks: column
                        .events
                        .iter()
                        .map(|positioned| SnapshotBlock {
                            event_id: positioned.event.id.clone(),
                            position: positioned.position,
                            rgb: positioned.event.rgb_or(default_rgb),
                        })
                        .collect(),
                })
                .collect(),
            is_empty: self.is_empty,
        }
    }
}

/// Owned copy of a layout, used by export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub range: VisibleRange,
    pub hour_labels: Vec<HourLabel>,
    pub grid_lines: Vec<f32>,
    pub columns: Vec<SnapshotColumn>,
    pub is_empty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotColumn {
    pub label: String,
    pub day_index: i32,
    pub blocks: Vec<SnapshotBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotBlock {
    pub event_id: String,
    pub position: EventPosition,
    pub rgb: (u8, u8, u8),
}

/// One label per hour in `start_hour..end_hour`
pub fn hour_labels(range: VisibleRange, format: HourFormat) -> Vec<HourLabel> {
    range
        .hours()
        .map(|hour| HourLabel {
            hour,
            label: format_hour(u16::from(hour), format),
        })
        .collect()
}

/// `span + 1` horizontal lines evenly spaced from 0 to 100 percent
pub fn grid_lines(range: VisibleRange) -> Vec<f32> {
    let span = range.span_hours();
    if span == 0 {
        return vec![0.0];
    }
    (0..=span)
        .map(|i| f32::from(i) * 100.0 / f32::from(span))
        .collect()
}
