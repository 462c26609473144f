//! Event block painting for the schedule view.
//!
//! A block shows the event's custom content when it has any. Otherwise it
//! shows the title, the body and the time span, each only when present.
//! Text scales with the column width and is clipped to the block.

use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Pos2, Rect, Rounding, Stroke};

use crate::models::event::ScheduleEvent;
use crate::ui_egui::theme::ScheduleTheme;

const TEXT_PADDING: f32 = 6.0;
const LINE_GAP: f32 = 2.0;

/// Font multiplier for a column of the given width
pub fn font_scale(column_width: f32) -> f32 {
    (column_width / 160.0).clamp(0.75, 1.25)
}

/// One paragraph of block text
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLine {
    pub text: String,
    pub size: f32,
    pub strong: bool,
    /// Wrapped rows kept before eliding; `usize::MAX` for no limit
    pub max_rows: usize,
}

/// Text paragraphs shown inside an event block, top to bottom
pub fn block_lines(event: &ScheduleEvent, scale: f32) -> Vec<BlockLine> {
    if let Some(custom) = event.custom_content.as_deref().filter(|c| !c.is_empty()) {
        return vec![BlockLine {
            text: custom.to_string(),
            size: 12.0 * scale,
            strong: false,
            max_rows: usize::MAX,
        }];
    }

    let mut lines = Vec::new();
    if let Some(title) = event.title.as_deref().filter(|t| !t.is_empty()) {
        lines.push(BlockLine {
            text: title.to_string(),
            size: 14.0 * scale,
            strong: true,
            max_rows: 2,
        });
    }
    if let Some(body) = event.body.as_deref().filter(|b| !b.is_empty()) {
        lines.push(BlockLine {
            text: body.to_string(),
            size: 12.0 * scale,
            strong: false,
            max_rows: 3,
        });
    }
    lines.push(BlockLine {
        text: event.time_span_label(),
        size: 10.0 * scale,
        strong: false,
        max_rows: 1,
    });
    lines
}

/// Paint an event block with its text, clipped to `rect`
pub fn paint_event_block(
    painter: &egui::Painter,
    rect: Rect,
    event: &ScheduleEvent,
    theme: &ScheduleTheme,
    scale: f32,
    hovered: Option<Color32>,
) {
    let fill = theme.event_color(event.color.as_deref());
    painter.rect_filled(rect, Rounding::same(4.0), fill);
    if let Some(stroke_color) = hovered {
        painter.rect_stroke(rect, Rounding::same(4.0), Stroke::new(2.0, stroke_color));
    }

    let text_color = ScheduleTheme::text_on(fill);
    let clipped = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    let wrap_width = (rect.width() - TEXT_PADDING * 2.0).max(1.0);
    let mut cursor = Pos2::new(rect.left() + TEXT_PADDING, rect.top() + TEXT_PADDING / 2.0);

    for line in block_lines(event, scale) {
        if cursor.y >= rect.bottom() {
            break;
        }

        let mut job = LayoutJob::default();
        job.wrap.max_width = wrap_width;
        job.wrap.max_rows = line.max_rows;
        job.append(
            &line.text,
            0.0,
            TextFormat {
                font_id: FontId::proportional(line.size),
                color: if line.strong {
                    text_color
                } else {
                    text_color.gamma_multiply(0.85)
                },
                ..Default::default()
            },
        );

        let galley = painter.ctx().fonts(|f| f.layout_job(job));
        let height = galley.size().y;
        clipped.galley(cursor, galley, text_color);
        cursor.y += height + LINE_GAP;
    }
}
