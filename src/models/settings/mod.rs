// Settings module
// Options recognized by the schedule widget

use serde::{Deserialize, Serialize};

use crate::models::header::{default_headers, DayHeader};
use crate::utils::time::HourFormat;

pub const DEFAULT_EMPTY_STATE_MESSAGE: &str = "No events scheduled";

/// Widget configuration, stored as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Show the built-in detail popup when no custom handler is installed
    pub use_default_popup: bool,
    /// Shown over the grid when there are no events
    pub empty_state_message: String,
    pub hour_format: HourFormat,
    /// "light", "dark" or "system"
    pub theme: String,
    /// Day columns, left to right
    pub headers: Vec<DayHeader>,
    pub export: ExportSettings,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            use_default_popup: true,
            empty_state_message: DEFAULT_EMPTY_STATE_MESSAGE.to_string(),
            hour_format: HourFormat::TwelveHour,
            theme: "light".to_string(),
            headers: default_headers(),
            export: ExportSettings::default(),
        }
    }
}

impl ScheduleSettings {
    /// Validate values that would make the widget unusable
    pub fn validate(&self) -> Result<(), String> {
        if self.headers.is_empty() {
            return Err("At least one day header is required".to_string());
        }

        if !matches!(self.theme.as_str(), "light" | "dark" | "system") {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        self.export.validate()
    }
}

/// Pixel size of exported snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub width: u32,
    pub height: u32,
}

impl ExportSettings {
    pub const MAX_DIMENSION: u32 = 8192;

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("Export dimensions must be non-zero".to_string());
        }
        if self.width > Self::MAX_DIMENSION || self.height > Self::MAX_DIMENSION {
            return Err(format!(
                "Export dimensions cannot exceed {} pixels",
                Self::MAX_DIMENSION
            ));
        }
        Ok(())
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}
