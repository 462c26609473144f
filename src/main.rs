// Weekly Schedule demo
// Main entry point

use weekly_schedule::ui_egui::ScheduleApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    log::info!("Starting Weekly Schedule demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Weekly Schedule")
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Weekly Schedule",
        options,
        Box::new(|cc| Ok(Box::new(ScheduleApp::new(cc)))),
    )
}
