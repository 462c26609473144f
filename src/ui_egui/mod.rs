mod app;
mod event_popup;
pub mod interaction;
pub mod theme;
pub mod views;
pub mod widget;

pub use app::ScheduleApp;
pub use interaction::{EventHandler, InteractionHandlers};
pub use theme::ScheduleTheme;
pub use widget::WeeklySchedule;
