//! Caller-owned event source.
//!
//! `ScheduleService` holds the event list the widget lays out. Adding and
//! removing are plain list operations: no de-duplication, no id checks.
//! Layout is always recomputed from the current list.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::event::ScheduleEvent;
use crate::models::header::DayHeader;
use crate::services::layout::{ScheduleLayout, VisibleRange};
use crate::utils::time::HourFormat;

/// A named set of events, as stored in schedule files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSchedule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScheduleFile {
    Events(Vec<ScheduleEvent>),
    Wrapped { events: Vec<ScheduleEvent> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionFile {
    List(Vec<NamedSchedule>),
    Wrapped { schedules: Vec<NamedSchedule> },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleService {
    events: Vec<ScheduleEvent>,
}

impl ScheduleService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<ScheduleEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First event with the given id
    pub fn find(&self, id: &str) -> Option<&ScheduleEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Append an event. Duplicate ids are allowed.
    pub fn add_event(&mut self, event: ScheduleEvent) {
        log::debug!("Adding event '{}'", event.id);
        self.events.push(event);
    }

    /// Remove every event with this id and return how many went
    pub fn remove_event(&mut self, id: &str) -> usize {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = before - self.events.len();
        log::debug!("Removed {} event(s) with id '{}'", removed, id);
        removed
    }

    /// Swap in a whole new event list
    pub fn replace_events(&mut self, events: Vec<ScheduleEvent>) {
        self.events = events;
    }

    pub fn into_events(self) -> Vec<ScheduleEvent> {
        self.events
    }

    /// Lay out the current events against the given headers
    pub fn layout<'a>(
        &'a self,
        headers: &'a [DayHeader],
        hour_format: HourFormat,
    ) -> ScheduleLayout<'a> {
        ScheduleLayout::compute(&self.events, headers, hour_format)
    }

    /// Lay out against a fixed window instead of inferring one
    pub fn layout_in_range<'a>(
        &'a self,
        headers: &'a [DayHeader],
        range: VisibleRange,
        hour_format: HourFormat,
    ) -> ScheduleLayout<'a> {
        ScheduleLayout::compute_with_range(&self.events, headers, range, hour_format)
    }

    /// Parse either a bare event array or `{"events": [...]}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ScheduleFile =
            serde_json::from_str(json).context("Failed to parse schedule JSON")?;
        let events = match file {
            ScheduleFile::Events(events) => events,
            ScheduleFile::Wrapped { events } => events,
        };
        Ok(Self::with_events(events))
    }

    pub fn load_from_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schedule file {:?}", path))?;
        let service = Self::from_json_str(&json)?;
        log::info!("Loaded {} events from {:?}", service.len(), path);
        Ok(service)
    }

    /// Write the events as `{"events": [...]}`
    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&serde_json::json!({ "events": self.events }))
            .context("Failed to serialise schedule")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write schedule file {:?}", path))?;
        Ok(())
    }
}

/// Parse a list of named schedules, bare or as `{"schedules": [...]}`
pub fn parse_schedule_collection(json: &str) -> Result<Vec<NamedSchedule>> {
    let file: CollectionFile =
        serde_json::from_str(json).context("Failed to parse schedule collection")?;
    Ok(match file {
        CollectionFile::List(schedules) => schedules,
        CollectionFile::Wrapped { schedules } => schedules,
    })
}

pub fn load_schedule_collection(path: &Path) -> Result<Vec<NamedSchedule>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule collection {:?}", path))?;
    parse_schedule_collection(&json)
}
