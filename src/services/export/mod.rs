//! Export of the visible schedule layout to PNG.
//!
//! The widget publishes every layout it computes into an [`ExportHandle`].
//! Callers keep a clone of the handle and ask it for a snapshot whenever they
//! like; the snapshot is rasterized on a blocking worker thread.

mod raster;

pub use raster::{encode_png, render_png, render_rgba, RasterOptions};

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

use crate::models::settings::ExportSettings;
use crate::services::layout::LayoutSnapshot;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no layout has been rendered yet")]
    NotReady,
    #[error("invalid export dimensions: {0}")]
    InvalidDimensions(String),
    #[error("failed to encode PNG: {0}")]
    Encoding(#[from] png::EncodingError),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export worker failed: {0}")]
    Worker(String),
}

#[derive(Debug, Default)]
struct ExportState {
    latest: Option<LayoutSnapshot>,
    settings: ExportSettings,
}

/// Capability for snapshotting the most recently rendered layout
#[derive(Debug, Clone, Default)]
pub struct ExportHandle {
    state: Arc<RwLock<ExportState>>,
}

impl ExportHandle {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            state: Arc::new(RwLock::new(ExportState {
                latest: None,
                settings,
            })),
        }
    }

    /// Record the layout that was just rendered
    pub fn publish(&self, snapshot: LayoutSnapshot) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.latest = Some(snapshot);
    }

    pub fn set_export_settings(&self, settings: ExportSettings) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.settings = settings;
    }

    pub fn export_settings(&self) -> ExportSettings {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .settings
    }

    pub fn is_ready(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .latest
            .is_some()
    }

    #[cfg(test)]
    pub(crate) fn latest(&self) -> Option<LayoutSnapshot> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .latest
            .clone()
    }

    /// The latest layout and raster options, copied out of the lock
    fn capture(&self) -> Result<(LayoutSnapshot, RasterOptions), ExportError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let snapshot = state.latest.clone().ok_or(ExportError::NotReady)?;
        Ok((snapshot, RasterOptions::from_settings(&state.settings)))
    }

    /// Rasterize the latest layout on a blocking worker and return PNG bytes
    pub async fn snapshot(&self) -> Result<Vec<u8>, ExportError> {
        let (snapshot, options) = self.capture()?;
        tokio::task::spawn_blocking(move || render_png(&snapshot, &options))
            .await
            .map_err(|e| ExportError::Worker(e.to_string()))?
    }

    /// Same as [`ExportHandle::snapshot`], on the calling thread
    pub fn snapshot_blocking(&self) -> Result<Vec<u8>, ExportError> {
        let (snapshot, options) = self.capture()?;
        render_png(&snapshot, &options)
    }

    /// Snapshot and write the PNG to `path`
    pub fn save_png(&self, path: &Path) -> Result<(), ExportError> {
        let bytes = self.snapshot_blocking()?;
        std::fs::write(path, bytes)?;
        log::info!("Exported schedule snapshot to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::ScheduleEvent;
    use crate::models::header::default_headers;
    use crate::services::layout::ScheduleLayout;
    use crate::utils::time::{ClockTime, HourFormat};

    fn published_handle(settings: ExportSettings) -> ExportHandle {
        let events = vec![ScheduleEvent::new(
            "1",
            vec![0, 2, 4],
            ClockTime::parse("10:00").unwrap(),
            ClockTime::parse("11:00").unwrap(),
        )
        .unwrap()];
        let headers = default_headers();
        let handle = ExportHandle::new(settings);
        handle.publish(ScheduleLayout::compute(&events, &headers, HourFormat::TwelveHour).snapshot());
        handle
    }

    fn decoded_size(bytes: &[u8]) -> (u32, u32) {
        let decoder = png::Decoder::new(bytes);
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        (info.width, info.height)
    }

    #[test]
    fn test_snapshot_before_publish_is_not_ready() {
        let handle = ExportHandle::new(ExportSettings::default());
        assert!(!handle.is_ready());
        assert!(matches!(handle.snapshot_blocking(), Err(ExportError::NotReady)));
    }

    #[test]
    fn test_snapshot_blocking_uses_configured_size() {
        let handle = published_handle(ExportSettings {
            width: 320,
            height: 240,
        });
        assert!(handle.is_ready());

        let bytes = handle.snapshot_blocking().unwrap();
        assert_eq!(decoded_size(&bytes), (320, 240));
    }

    #[test]
    fn test_clones_share_state() {
        let handle = ExportHandle::new(ExportSettings::default());
        let clone = handle.clone();

        let events: Vec<ScheduleEvent> = Vec::new();
        let headers = default_headers();
        handle.publish(ScheduleLayout::compute(&events, &headers, HourFormat::TwelveHour).snapshot());

        assert!(clone.is_ready());
        clone.set_export_settings(ExportSettings {
            width: 100,
            height: 100,
        });
        assert_eq!(handle.export_settings().width, 100);
    }

    #[test]
    fn test_invalid_settings_surface_as_error() {
        let handle = published_handle(ExportSettings {
            width: 0,
            height: 240,
        });
        assert!(matches!(
            handle.snapshot_blocking(),
            Err(ExportError::InvalidDimensions(_))
        ));
    }

    #[tokio::test]
    async fn test_async_snapshot() {
        let handle = published_handle(ExportSettings {
            width: 200,
            height: 150,
        });
        let bytes = handle.snapshot().await.unwrap();
        assert_eq!(decoded_size(&bytes), (200, 150));
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("schedule.png");
        let handle = published_handle(ExportSettings {
            width: 200,
            height: 150,
        });

        handle.save_png(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(decoded_size(&bytes), (200, 150));
    }

    #[test]
    fn test_save_png_into_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("schedule.png");
        let handle = published_handle(ExportSettings::default());
        assert!(matches!(handle.save_png(&path), Err(ExportError::Io(_))));
    }
}
