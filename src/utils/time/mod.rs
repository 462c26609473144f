// Time-of-day utilities
// Wall-clock "HH:MM" values used by schedule events and the time axis

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minutes in a full day; `24:00` is the only value allowed to reach it.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors produced while parsing an `HH:MM` string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time '{0}' is not in HH:MM form")]
    Format(String),
    #[error("hour {hour} in '{input}' is out of range")]
    Hour { input: String, hour: u16 },
    #[error("minute {minute} in '{input}' is out of range")]
    Minute { input: String, minute: u16 },
}

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Accepts `00:00` through `23:59`, plus `24:00` so an event can run to the
/// end of the day. Ordering follows minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };
    pub const END_OF_DAY: ClockTime = ClockTime {
        minutes: MINUTES_PER_DAY,
    };

    /// Build a time from hour and minute components
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
            return None;
        }
        Some(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Build a time from minutes since midnight
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Parse an `HH:MM` string. A single-digit hour (`9:30`) is accepted.
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        let trimmed = input.trim();
        let (hours, minutes) = trimmed
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(input.to_string()))?;

        let is_numeric = |s: &str| !s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit());
        if !is_numeric(hours) || minutes.len() != 2 || !is_numeric(minutes) {
            return Err(TimeParseError::Format(input.to_string()));
        }

        let hour: u16 = hours
            .parse()
            .map_err(|_| TimeParseError::Format(input.to_string()))?;
        let minute: u16 = minutes
            .parse()
            .map_err(|_| TimeParseError::Format(input.to_string()))?;

        if minute > 59 {
            return Err(TimeParseError::Minute {
                input: input.to_string(),
                minute,
            });
        }
        if hour > 24 || (hour == 24 && minute != 0) {
            return Err(TimeParseError::Hour {
                input: input.to_string(),
                hour,
            });
        }

        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Minutes since midnight
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for ClockTime {
    type Error = TimeParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// How hour labels on the time axis are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourFormat {
    /// `9:00 AM`, `12:00 PM`
    #[default]
    TwelveHour,
    /// `09:00`, `21:00`
    TwentyFourHour,
}

/// Format a whole hour for the time axis
pub fn format_hour(hour: u16, format: HourFormat) -> String {
    match format {
        HourFormat::TwelveHour => {
            let period = if hour % 24 >= 12 { "PM" } else { "AM" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:00 {}", display, period)
        }
        HourFormat::TwentyFourHour => format!("{:02}:00", hour),
    }
}
