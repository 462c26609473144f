use serde::{Deserialize, Serialize};

use super::EventPosition;

/// Fixed pixel measurements of the schedule table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Gap between cells and around the table
    pub spacing: f32,
    pub time_column_width: f32,
    pub header_height: f32,
    /// Horizontal inset of event blocks inside their column
    pub block_inset: f32,
    /// Blocks never render shorter than this, whatever their percentage
    pub min_block_height: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            time_column_width: 80.0,
            header_height: 48.0,
            block_inset: 5.0,
            min_block_height: 20.0,
        }
    }
}

/// Axis-aligned rectangle in pixels, `min` inclusive and `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl PixelRect {
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// Cell rectangles for a table of `column_count` day columns filling
/// `width x height` pixels, shared by the egui view and the PNG export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub metrics: GridMetrics,
    pub width: f32,
    pub height: f32,
    pub column_count: usize,
    pub column_width: f32,
}

impl GridGeometry {
    pub fn new(width: f32, height: f32, column_count: usize, metrics: GridMetrics) -> Self {
        let gaps = metrics.spacing * (column_count as f32 + 2.0);
        let available = width - metrics.time_column_width - gaps;
        let column_width = if column_count == 0 {
            0.0
        } else {
            (available / column_count as f32).max(1.0)
        };

        Self {
            metrics,
            width,
            height,
            column_count,
            column_width,
        }
    }

    fn column_x(&self, index: usize) -> f32 {
        let m = &self.metrics;
        m.spacing * 2.0 + m.time_column_width + index as f32 * (self.column_width + m.spacing)
    }

    fn header_span(&self) -> (f32, f32) {
        let top = self.metrics.spacing;
        (top, top + self.metrics.header_height)
    }

    fn body_span(&self) -> (f32, f32) {
        let (_, header_bottom) = self.header_span();
        let top = header_bottom + self.metrics.spacing;
        let bottom = (self.height - self.metrics.spacing).max(top);
        (top, bottom)
    }

    pub fn time_header(&self) -> PixelRect {
        let (y0, y1) = self.header_span();
        PixelRect {
            x0: self.metrics.spacing,
            y0,
            x1: self.metrics.spacing + self.metrics.time_column_width,
            y1,
        }
    }

    pub fn time_body(&self) -> PixelRect {
        let (y0, y1) = self.body_span();
        PixelRect {
            y0,
            y1,
            ..self.time_header()
        }
    }

    pub fn header_cell(&self, index: usize) -> PixelRect {
        let (y0, y1) = self.header_span();
        let x0 = self.column_x(index);
        PixelRect {
            x0,
            y0,
            x1: x0 + self.column_width,
            y1,
        }
    }

    pub fn body_cell(&self, index: usize) -> PixelRect {
        let (y0, y1) = self.body_span();
        PixelRect {
            y0,
            y1,
            ..self.header_cell(index)
        }
    }

    /// The whole body row, time column through the last day column
    pub fn body(&self) -> PixelRect {
        let (y0, y1) = self.body_span();
        let x1 = if self.column_count == 0 {
            self.time_body().x1
        } else {
            self.body_cell(self.column_count - 1).x1
        };
        PixelRect {
            x0: self.metrics.spacing,
            y0,
            x1,
            y1,
        }
    }

    /// Vertical pixel of a percentage offset inside the body
    pub fn body_y(&self, percent: f32) -> f32 {
        let (y0, y1) = self.body_span();
        y0 + percent / 100.0 * (y1 - y0)
    }

    /// Block for an event in column `index`, at least `min_block_height`
    /// tall. A block that would run past the bottom of the column is moved
    /// up so it ends on the bottom edge.
    pub fn block(&self, index: usize, position: EventPosition) -> PixelRect {
        let cell = self.body_cell(index);
        let height = (position.height / 100.0 * cell.height())
            .max(self.metrics.min_block_height)
            .min(cell.height());
        let top = self.body_y(position.top).min(cell.y1 - height);
        PixelRect {
            x0: cell.x0 + self.metrics.block_inset,
            y0: top,
            x1: cell.x1 - self.metrics.block_inset,
            y1: top + height,
        }
    }
}
