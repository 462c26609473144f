pub mod event_rendering;
mod palette;
pub mod schedule_view;

pub use schedule_view::{ScheduleView, ScheduleViewOptions};
