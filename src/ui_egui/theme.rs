//! Theme module for the schedule widget
//!
//! Defines the ScheduleTheme structure and the conversions between
//! egui::Color32 and the hex strings events carry.

use egui::Color32;

use crate::models::event::parse_hex_color;

/// Colors used by the schedule view
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Backdrop behind the table of cells
    pub table_background: Color32,

    /// Header, time column and day column cells
    pub cell_background: Color32,

    /// Header cell of the current weekday
    pub today_background: Color32,

    /// Accent used for the today outline
    pub today_border: Color32,

    /// Horizontal hour lines
    pub grid_line: Color32,

    /// Primary text color (day labels, event titles)
    pub text_primary: Color32,

    /// Secondary text color (hour labels, event times)
    pub text_secondary: Color32,

    /// Fill for events without a color of their own
    pub default_event: Color32,
}

impl ScheduleTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            table_background: Color32::from_rgb(240, 240, 240),
            cell_background: Color32::from_rgb(255, 255, 255),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            grid_line: Color32::from_rgb(229, 229, 229),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(102, 102, 102),
            default_event: Color32::from_rgb(224, 224, 224),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            table_background: Color32::from_rgb(30, 30, 30),
            cell_background: Color32::from_rgb(40, 40, 40),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            grid_line: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            default_event: Color32::from_rgb(90, 90, 90),
        }
    }

    /// Resolve a settings theme name; "system" follows the OS preference
    pub fn from_setting(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "system" => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
            _ => Self::light(),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.cell_background;
        visuals.panel_fill = self.table_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Event fill, or the theme default when the event has no valid color
    pub fn event_color(&self, color: Option<&str>) -> Color32 {
        color
            .and_then(|hex| Self::hex_to_color(hex).ok())
            .unwrap_or(self.default_event)
    }

    /// `default_event` as an RGB triple, for the PNG export
    pub fn default_event_rgb(&self) -> (u8, u8, u8) {
        (self.default_event.r(), self.default_event.g(), self.default_event.b())
    }

    /// Text color that stays readable on top of `background`
    pub fn text_on(background: Color32) -> Color32 {
        let luminance = 0.299 * background.r() as f32
            + 0.587 * background.g() as f32
            + 0.114 * background.b() as f32;
        if luminance > 150.0 {
            Color32::from_rgb(30, 30, 30)
        } else {
            Color32::WHITE
        }
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    /// Parse `#RRGGBB` or `#RGB` to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        parse_hex_color(hex)
            .map(|(r, g, b)| Color32::from_rgb(r, g, b))
            .ok_or_else(|| format!("Invalid hex color: {}", hex))
    }
}

impl Default for ScheduleTheme {
    fn default() -> Self {
        Self::light()
    }
}
