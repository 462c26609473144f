// Header module
// Day columns shown across the top of the schedule

use serde::{Deserialize, Serialize};

/// A configured day column.
///
/// `day_index` is only a grouping key: indices need not start at zero or be
/// contiguous, they just have to match the values used in event `days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHeader {
    pub label: String,
    #[serde(rename = "dayIndex", alias = "day_index")]
    pub day_index: i32,
}

impl DayHeader {
    pub fn new(label: impl Into<String>, day_index: i32) -> Self {
        Self {
            label: label.into(),
            day_index,
        }
    }
}

/// Monday through Friday with day indices 0 through 4
pub fn default_headers() -> Vec<DayHeader> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .enumerate()
        .map(|(index, label)| DayHeader::new(*label, index as i32))
        .collect()
}

/// Full week starting on Monday, indices 0 through 6
pub fn full_week_headers() -> Vec<DayHeader> {
    [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ]
    .iter()
    .enumerate()
    .map(|(index, label)| DayHeader::new(*label, index as i32))
    .collect()
}
