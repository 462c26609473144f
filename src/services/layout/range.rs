use serde::{Deserialize, Serialize};

use crate::models::event::ScheduleEvent;

/// Hours shown when there are no events to infer a window from
pub const DEFAULT_VISIBLE_RANGE: VisibleRange = VisibleRange {
    start_hour: 8,
    end_hour: 18,
};

/// Inferred windows narrower than this get one hour of padding on each side
pub const MIN_VISIBLE_SPAN_HOURS: u8 = 3;

/// The hour window rendered on the time axis, `0 <= start_hour <= end_hour <= 24`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeHours", into = "RangeHours")]
pub struct VisibleRange {
    start_hour: u8,
    end_hour: u8,
}

/// Serialized form of [`VisibleRange`], checked on the way in
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RangeHours {
    start_hour: u8,
    end_hour: u8,
}

impl TryFrom<RangeHours> for VisibleRange {
    type Error = String;

    fn try_from(hours: RangeHours) -> Result<Self, Self::Error> {
        Self::new(hours.start_hour, hours.end_hour).ok_or_else(|| {
            format!(
                "invalid hour range {}-{}: expected start <= end <= 24",
                hours.start_hour, hours.end_hour
            )
        })
    }
}

impl From<VisibleRange> for RangeHours {
    fn from(range: VisibleRange) -> Self {
        Self {
            start_hour: range.start_hour,
            end_hour: range.end_hour,
        }
    }
}

impl VisibleRange {
    /// `None` unless `start_hour <= end_hour <= 24`
    pub fn new(start_hour: u8, end_hour: u8) -> Option<Self> {
        (start_hour <= end_hour && end_hour <= 24).then_some(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    pub fn span_hours(&self) -> u8 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    pub fn total_minutes(&self) -> u32 {
        u32::from(self.span_hours()) * 60
    }

    /// Whole hours that get a label: `start_hour..end_hour`
    pub fn hours(&self) -> impl Iterator<Item = u8> {
        self.start_hour..self.end_hour
    }
}

impl Default for VisibleRange {
    fn default() -> Self {
        DEFAULT_VISIBLE_RANGE
    }
}

/// Derive the visible hour window from a set of events.
///
/// The window runs from the hour containing the earliest start to the hour
/// boundary at or after the latest end. Windows under three hours are widened
/// by one hour on each side, clamped to the day.
pub fn infer_visible_range<'a, I>(events: I) -> VisibleRange
where
    I: IntoIterator<Item = &'a ScheduleEvent>,
{
    let mut bounds: Option<(i32, i32)> = None;
    for event in events {
        let start = i32::from(event.start.minutes());
        let end = i32::from(event.end.minutes());
        bounds = Some(match bounds {
            Some((earliest, latest)) => (earliest.min(start), latest.max(end)),
            None => (start, end),
        });
    }

    let Some((earliest, latest)) = bounds else {
        return DEFAULT_VISIBLE_RANGE;
    };

    let start_hour = (earliest.div_euclid(60)).clamp(0, 24);
    let end_hour = ((latest + 59).div_euclid(60)).clamp(0, 24);
    // Only inverted spans can push the end before the start
    let end_hour = end_hour.max(start_hour);

    let (start_hour, end_hour) = if end_hour - start_hour < i32::from(MIN_VISIBLE_SPAN_HOURS) {
        ((start_hour - 1).max(0), (end_hour + 1).min(24))
    } else {
        (start_hour, end_hour)
    };

    VisibleRange {
        start_hour: start_hour as u8,
        end_hour: end_hour as u8,
    }
}
