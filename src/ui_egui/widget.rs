//! The embeddable weekly schedule widget.
//!
//! `WeeklySchedule` owns the configuration, click handlers, popup state and
//! the export handle. The host owns the event list and hands it to
//! [`WeeklySchedule::show`] every frame; each call recomputes the layout from
//! scratch, so adding or removing events takes effect on the next frame.

use crate::models::event::ScheduleEvent;
use crate::models::settings::ScheduleSettings;
use crate::services::export::ExportHandle;
use crate::services::layout::{GridMetrics, ScheduleLayout};
use crate::ui_egui::event_popup::show_event_popup;
use crate::ui_egui::interaction::{EventHandler, InteractionHandlers};
use crate::ui_egui::theme::ScheduleTheme;
use crate::ui_egui::views::{ScheduleView, ScheduleViewOptions};

pub struct WeeklySchedule {
    settings: ScheduleSettings,
    theme: ScheduleTheme,
    handlers: InteractionHandlers,
    /// Event shown in the built-in popup
    selected: Option<ScheduleEvent>,
    export: ExportHandle,
    today: Option<i32>,
    metrics: GridMetrics,
}

impl WeeklySchedule {
    pub fn new(settings: ScheduleSettings) -> Self {
        let theme = ScheduleTheme::from_setting(&settings.theme);
        let handlers = InteractionHandlers {
            use_default_popup: settings.use_default_popup,
            ..Default::default()
        };
        let export = ExportHandle::new(settings.export);

        Self {
            settings,
            theme,
            handlers,
            selected: None,
            export,
            today: None,
            metrics: GridMetrics::default(),
        }
    }

    pub fn with_theme(mut self, theme: ScheduleTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the built-in popup with `handler`
    pub fn with_custom_popup(mut self, handler: impl EventHandler + 'static) -> Self {
        self.handlers.custom_popup = Some(Box::new(handler));
        self
    }

    /// Notify `handler` on every block click
    pub fn with_on_click(mut self, handler: impl EventHandler + 'static) -> Self {
        self.handlers.on_click = Some(Box::new(handler));
        self
    }

    /// Highlight the header whose day index matches
    pub fn with_today(mut self, day_index: Option<i32>) -> Self {
        self.today = day_index;
        self
    }

    /// Capability for exporting whatever was last rendered
    pub fn export_handle(&self) -> ExportHandle {
        self.export.clone()
    }

    pub fn settings(&self) -> &ScheduleSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ScheduleSettings) {
        self.handlers.use_default_popup = settings.use_default_popup;
        self.export.set_export_settings(settings.export);
        if settings.theme != self.settings.theme {
            self.theme = ScheduleTheme::from_setting(&settings.theme);
        }
        if !settings.use_default_popup {
            self.selected = None;
        }
        self.settings = settings;
    }

    pub fn theme(&self) -> &ScheduleTheme {
        &self.theme
    }

    pub fn selected_event(&self) -> Option<&ScheduleEvent> {
        self.selected.as_ref()
    }

    pub fn close_popup(&mut self) {
        self.selected = None;
    }

    /// Route a click on `event` through the handlers
    pub fn handle_click(&mut self, event: &ScheduleEvent) {
        if self.handlers.dispatch(event) {
            self.selected = Some(event.clone());
        }
    }

    /// Compute the layout for `events`, paint it and process clicks.
    /// Returns the event clicked this frame, if any.
    pub fn show(&mut self, ui: &mut egui::Ui, events: &[ScheduleEvent]) -> Option<ScheduleEvent> {
        let clicked = {
            let layout = ScheduleLayout::compute(events, &self.settings.headers, self.settings.hour_format);
            self.export
                .publish(layout.snapshot_with_fallback(self.theme.default_event_rgb()));

            let options = ScheduleViewOptions {
                empty_state_message: &self.settings.empty_state_message,
                today: self.today,
                metrics: self.metrics,
            };
            ScheduleView::show(ui, &layout, &self.theme, &options).cloned()
        };

        if let Some(event) = clicked.as_ref() {
            self.handle_click(event);
        }

        if let Some(event) = self.selected.as_ref() {
            if show_event_popup(ui.ctx(), event, &self.theme) {
                self.selected = None;
            }
        }

        clicked
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new(ScheduleSettings::default())
    }
}
