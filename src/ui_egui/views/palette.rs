use crate::ui_egui::theme::ScheduleTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct SchedulePalette {
    pub table_bg: Color32,
    pub cell_bg: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
    pub today_bg: Color32,
    pub today_border: Color32,
    pub time_bg: Color32,
    pub time_text: Color32,
    pub grid_line: Color32,
    pub hover_stroke: Color32,
    pub empty_text: Color32,
    pub empty_backdrop: Color32,
}

impl SchedulePalette {
    pub fn from_theme(theme: &ScheduleTheme) -> Self {
        Self {
            table_bg: theme.table_background,
            cell_bg: theme.cell_background,
            header_bg: theme.cell_background,
            header_text: theme.text_primary,
            today_bg: theme.today_background,
            today_border: theme.today_border,
            time_bg: blend(theme.table_background, theme.cell_background, 0.6),
            time_text: theme.text_secondary,
            grid_line: theme.grid_line,
            hover_stroke: with_alpha(theme.today_border, if theme.is_dark { 200 } else { 160 }),
            empty_text: theme.text_secondary,
            empty_backdrop: with_alpha(theme.cell_background, 220),
        }
    }
}
