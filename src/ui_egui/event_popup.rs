//! Built-in detail popup for a clicked event.
//!
//! A translucent backdrop covers the whole viewport; clicking it, pressing
//! Escape or pressing Close dismisses the card.

use egui::{Align2, Color32, Order, RichText, Rounding, Sense, Stroke};

use crate::models::event::ScheduleEvent;
use crate::ui_egui::theme::ScheduleTheme;

const CLOSE_BUTTON: Color32 = Color32::from_rgb(0, 123, 255);

/// Show the popup for `event`. Returns true when the user asked to close it.
pub fn show_event_popup(ctx: &egui::Context, event: &ScheduleEvent, theme: &ScheduleTheme) -> bool {
    let mut close = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("schedule_popup_backdrop"))
        .order(Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, Sense::click());
            ui.painter().rect_filled(
                screen,
                Rounding::ZERO,
                Color32::from_rgba_unmultiplied(0, 0, 0, 128),
            );
            if response.clicked() {
                close = true;
            }
        });

    egui::Area::new(egui::Id::new("schedule_popup_card"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(theme.cell_background)
                .rounding(Rounding::same(10.0))
                .inner_margin(egui::Margin::same(20.0))
                .stroke(Stroke::new(1.0, theme.grid_line))
                .show(ui, |ui| {
                    ui.set_max_width((screen.width() * 0.8).min(420.0));
                    ui.set_min_width(240.0);

                    if let Some(title) = event.title.as_deref().filter(|t| !t.is_empty()) {
                        ui.label(RichText::new(title).strong().size(18.0).color(theme.text_primary));
                        ui.add_space(6.0);
                    }
                    if let Some(body) = event.body.as_deref().filter(|b| !b.is_empty()) {
                        ui.label(RichText::new(body).size(14.0).color(theme.text_primary));
                        ui.add_space(6.0);
                    }
                    ui.label(
                        RichText::new(event.time_span_label())
                            .size(12.0)
                            .color(theme.text_secondary),
                    );

                    ui.add_space(12.0);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        let button = egui::Button::new(RichText::new("Close").color(Color32::WHITE))
                            .fill(CLOSE_BUTTON)
                            .rounding(Rounding::same(5.0));
                        if ui.add(button).clicked() {
                            close = true;
                        }
                    });
                });
        });

    close
}
