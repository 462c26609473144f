mod toast;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{Datelike, Local};

use self::toast::ToastManager;
use crate::models::event::ScheduleEvent;
use crate::services::export::ExportError;
use crate::services::schedule::{parse_schedule_collection, NamedSchedule, ScheduleService};
use crate::services::settings::SettingsService;
use crate::ui_egui::widget::WeeklySchedule;
use crate::utils::time::{ClockTime, HourFormat};

const DEMO_SCHEDULES: &str = include_str!("../../demos/schedules.json");
const DEMO_EVENT_ID: &str = "demo-added";

type ExportResult = (PathBuf, Result<(), ExportError>);

/// Demo host: switches between sample schedules and exercises the widget's
/// add/remove, settings and export surfaces
pub struct ScheduleApp {
    schedules: Vec<NamedSchedule>,
    active: usize,
    source: ScheduleService,
    widget: WeeklySchedule,
    settings_service: SettingsService,
    runtime: Option<tokio::runtime::Runtime>,
    export_tx: Sender<ExportResult>,
    export_rx: Receiver<ExportResult>,
    toasts: ToastManager,
    last_clicked: Option<String>,
}

impl ScheduleApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_default_location();
        let settings = settings_service.get_or_default();

        let schedules = match parse_schedule_collection(DEMO_SCHEDULES) {
            Ok(schedules) => schedules,
            Err(e) => {
                log::error!("Failed to load demo schedules: {:#}", e);
                Vec::new()
            }
        };
        let source = ScheduleService::with_events(
            schedules
                .first()
                .map(|schedule| schedule.events.clone())
                .unwrap_or_default(),
        );

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => Some(runtime),
            Err(e) => {
                log::error!("Failed to start export runtime: {}", e);
                None
            }
        };

        let today = Local::now().weekday().num_days_from_monday() as i32;
        let widget = WeeklySchedule::new(settings)
            .with_today(Some(today))
            .with_on_click(|event: &ScheduleEvent| log::info!("Clicked event '{}'", event.id));
        widget.theme().apply_to_context(&cc.egui_ctx);

        let (export_tx, export_rx) = mpsc::channel();

        Self {
            schedules,
            active: 0,
            source,
            widget,
            settings_service,
            runtime,
            export_tx,
            export_rx,
            toasts: ToastManager::default(),
            last_clicked: None,
        }
    }

    fn switch_schedule(&mut self, index: usize) {
        if let Some(schedule) = self.schedules.get(index) {
            log::info!("Switching to schedule '{}'", schedule.id);
            self.active = index;
            self.source.replace_events(schedule.events.clone());
            self.toasts.info(format!("Showing {}", schedule.name));
        }
    }

    fn add_demo_event(&mut self) {
        let event = ScheduleEvent::builder()
            .id(DEMO_EVENT_ID)
            .days(vec![1, 3])
            .start(ClockTime::from_hm(9, 0).unwrap_or(ClockTime::MIDNIGHT))
            .end(ClockTime::from_hm(9, 45).unwrap_or(ClockTime::END_OF_DAY))
            .color("#ffd27f")
            .title("Standup")
            .body("Added from the toolbar")
            .build();

        match event {
            Ok(event) => self.source.add_event(event),
            Err(e) => self.toasts.error(e),
        }
    }

    fn toggle_hour_format(&mut self) {
        let mut settings = self.widget.settings().clone();
        settings.hour_format = match settings.hour_format {
            HourFormat::TwelveHour => HourFormat::TwentyFourHour,
            HourFormat::TwentyFourHour => HourFormat::TwelveHour,
        };

        if let Err(e) = self.settings_service.update(&settings) {
            log::error!("Failed to save settings: {:#}", e);
            self.toasts.error("Could not save settings");
        }
        self.widget.set_settings(settings);
    }

    fn export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Export Schedule to PNG")
            .set_file_name("schedule.png")
            .add_filter("PNG images", &["png"])
            .save_file()
        else {
            return;
        };

        let Some(runtime) = &self.runtime else {
            self.toasts.error("Export is unavailable");
            return;
        };

        let handle = self.widget.export_handle();
        let tx = self.export_tx.clone();
        runtime.spawn(async move {
            let result = match handle.snapshot().await {
                Ok(bytes) => tokio::fs::write(&path, bytes).await.map_err(ExportError::from),
                Err(e) => Err(e),
            };
            let _ = tx.send((path, result));
        });
    }

    fn poll_exports(&mut self) {
        while let Ok((path, result)) = self.export_rx.try_recv() {
            match result {
                Ok(()) => {
                    log::info!("Exported schedule to {:?}", path);
                    self.toasts.success(format!("Saved {}", path.display()));
                }
                Err(e) => {
                    log::error!("Failed to export schedule: {}", e);
                    self.toasts.error(format!("Export failed: {}", e));
                }
            }
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let current = self
                .schedules
                .get(self.active)
                .map(|schedule| schedule.name.clone())
                .unwrap_or_default();
            let mut selected = self.active;
            egui::ComboBox::from_id_source("schedule_picker")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (index, schedule) in self.schedules.iter().enumerate() {
                        ui.selectable_value(&mut selected, index, &schedule.name);
                    }
                });
            if selected != self.active {
                self.switch_schedule(selected);
            }

            ui.separator();
            if ui.button("Add standup").clicked() {
                self.add_demo_event();
            }
            if ui.button("Remove standup").clicked() {
                self.source.remove_event(DEMO_EVENT_ID);
            }
            if ui.button("Clear").clicked() {
                self.source.replace_events(Vec::new());
            }

            ui.separator();
            let format_label = match self.widget.settings().hour_format {
                HourFormat::TwelveHour => "24-hour clock",
                HourFormat::TwentyFourHour => "12-hour clock",
            };
            if ui.button(format_label).clicked() {
                self.toggle_hour_format();
            }
            if ui.button("Export PNG…").clicked() {
                self.export_png();
            }

            if let Some(id) = &self.last_clicked {
                ui.separator();
                ui.label(format!("Last clicked: {}", id));
            }
        });
    }
}

impl eframe::App for ScheduleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_exports();

        egui::TopBottomPanel::top("schedule_toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_toolbar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(event) = self.widget.show(ui, self.source.events()) {
                self.last_clicked = Some(event.id);
            }
        });

        self.toasts.render(ctx, self.widget.theme().is_dark);
    }
}
