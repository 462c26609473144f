//! Weekly table view.
//!
//! Paints a computed [`ScheduleLayout`]: the header row, the time axis, one
//! column per header with hour lines and event blocks, and the empty-state
//! message when there are no events.

use egui::{Align2, CursorIcon, FontId, Rect, Rounding, Sense, Stroke};

use super::event_rendering::{font_scale, paint_event_block};
use super::palette::SchedulePalette;
use crate::models::event::ScheduleEvent;
use crate::services::layout::{GridGeometry, GridMetrics, PixelRect, ScheduleLayout};
use crate::ui_egui::theme::ScheduleTheme;

pub struct ScheduleViewOptions<'s> {
    pub empty_state_message: &'s str,
    /// Day index to highlight in the header row
    pub today: Option<i32>,
    pub metrics: GridMetrics,
}

fn to_rect(rect: PixelRect, origin: egui::Pos2) -> Rect {
    Rect::from_min_max(
        origin + egui::vec2(rect.x0, rect.y0),
        origin + egui::vec2(rect.x1, rect.y1),
    )
}

pub struct ScheduleView;

impl ScheduleView {
    /// Paint the layout into the available space. Returns the event whose
    /// block was clicked this frame.
    pub fn show<'a>(
        ui: &mut egui::Ui,
        layout: &ScheduleLayout<'a>,
        theme: &ScheduleTheme,
        options: &ScheduleViewOptions<'_>,
    ) -> Option<&'a ScheduleEvent> {
        let palette = SchedulePalette::from_theme(theme);
        let desired_size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());
        let origin = rect.min;
        let painter = ui.painter_at(rect);

        let geometry = GridGeometry::new(
            rect.width(),
            rect.height(),
            layout.columns.len(),
            options.metrics,
        );
        let scale = font_scale(geometry.column_width);

        painter.rect_filled(rect, Rounding::same(8.0), palette.table_bg);

        // Header row
        painter.rect_filled(
            to_rect(geometry.time_header(), origin),
            Rounding::same(4.0),
            palette.header_bg,
        );
        painter.text(
            to_rect(geometry.time_header(), origin).center(),
            Align2::CENTER_CENTER,
            "Time",
            FontId::proportional(14.0),
            palette.header_text,
        );
        for (index, column) in layout.columns.iter().enumerate() {
            let cell = to_rect(geometry.header_cell(index), origin);
            let is_today = options.today == Some(column.header.day_index);
            let fill = if is_today { palette.today_bg } else { palette.header_bg };
            painter.rect_filled(cell, Rounding::same(4.0), fill);
            if is_today {
                painter.rect_stroke(cell, Rounding::same(4.0), Stroke::new(1.5, palette.today_border));
            }
            painter
                .with_clip_rect(cell)
                .text(
                    cell.center(),
                    Align2::CENTER_CENTER,
                    &column.header.label,
                    FontId::proportional(14.0 * scale),
                    palette.header_text,
                );
        }

        // Time column
        let time_body = to_rect(geometry.time_body(), origin);
        painter.rect_filled(time_body, Rounding::same(4.0), palette.time_bg);
        let span = layout.range.span_hours();
        for (i, label) in layout.hour_labels.iter().enumerate() {
            let percent = f32::from(i as u16) * 100.0 / f32::from(span.max(1));
            let y = origin.y + geometry.body_y(percent);
            painter.text(
                egui::pos2(time_body.center().x, y + 4.0),
                Align2::CENTER_TOP,
                &label.label,
                FontId::proportional(12.0),
                palette.time_text,
            );
        }

        // Day columns
        let pointer = response.hover_pos();
        let mut hovered_event = None;
        let mut blocks = Vec::new();
        for (index, column) in layout.columns.iter().enumerate() {
            let cell = to_rect(geometry.body_cell(index), origin);
            painter.rect_filled(cell, Rounding::same(4.0), palette.cell_bg);
            for offset in &layout.grid_lines {
                let y = origin.y + geometry.body_y(*offset);
                painter.hline(cell.x_range(), y, Stroke::new(1.0, palette.grid_line));
            }

            for positioned in &column.events {
                let block = to_rect(geometry.block(index, positioned.position), origin);
                if block.height() <= 0.0 {
                    continue;
                }
                blocks.push((block, positioned.event));
            }
        }

        // Later blocks paint on top, so they win the hit test
        if let Some(pos) = pointer {
            hovered_event = blocks
                .iter()
                .rev()
                .find(|(block, _)| block.contains(pos))
                .map(|(block, event)| (*block, *event));
        }

        for (block, event) in &blocks {
            let hovered = hovered_event
                .filter(|(hit, hit_event)| hit == block && std::ptr::eq(*hit_event, *event))
                .map(|_| palette.hover_stroke);
            paint_event_block(&painter, *block, event, theme, scale, hovered);
        }

        if hovered_event.is_some() {
            ui.output_mut(|out| out.cursor_icon = CursorIcon::PointingHand);
        }

        if layout.is_empty && !options.empty_state_message.is_empty() {
            let body = to_rect(geometry.body(), origin);
            let galley = painter.layout(
                options.empty_state_message.to_string(),
                FontId::proportional(16.0),
                palette.empty_text,
                body.width() * 0.8,
            );
            let text_rect = Align2::CENTER_CENTER.anchor_size(body.center(), galley.size());
            painter.rect_filled(text_rect.expand(12.0), Rounding::same(6.0), palette.empty_backdrop);
            painter.galley(text_rect.min, galley, palette.empty_text);
        }

        if response.clicked() {
            let click = response.interact_pointer_pos()?;
            return blocks
                .iter()
                .rev()
                .find(|(block, _)| block.contains(click))
                .map(|(_, event)| *event);
        }
        None
    }
}
