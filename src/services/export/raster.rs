//! Software rasterizer for layout snapshots.
//!
//! Paints the grid the egui view uses into an RGBA buffer and encodes it as
//! PNG. Labels are not drawn.

use super::ExportError;
use crate::models::settings::ExportSettings;
use crate::services::layout::{GridGeometry, GridMetrics, LayoutSnapshot, PixelRect};

type Rgba = [u8; 4];

/// Geometry and colors of the exported image
#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    pub width: u32,
    pub height: u32,
    pub metrics: GridMetrics,
    pub background: Rgba,
    pub cell: Rgba,
    pub grid_line: Rgba,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self::from_settings(&ExportSettings::default())
    }
}

impl RasterOptions {
    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            metrics: GridMetrics::default(),
            background: [0xf0, 0xf0, 0xf0, 0xff],
            cell: [0xff, 0xff, 0xff, 0xff],
            grid_line: [0xe5, 0xe5, 0xe5, 0xff],
        }
    }
}

struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let pixels = fill
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Fill a rectangle, clipped to the canvas
    fn fill(&mut self, rect: PixelRect, color: Rgba) {
        let clip_x = |v: f32| v.round().clamp(0.0, self.width as f32) as usize;
        let clip_y = |v: f32| v.round().clamp(0.0, self.height as f32) as usize;
        let (x0, x1) = (clip_x(rect.x0), clip_x(rect.x1));
        let (y0, y1) = (clip_y(rect.y0), clip_y(rect.y1));

        let stride = self.width as usize * 4;
        for y in y0..y1 {
            let row = y * stride;
            for x in x0..x1 {
                let i = row + x * 4;
                self.pixels[i..i + 4].copy_from_slice(&color);
            }
        }
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[i..i + 4]);
        Some(rgba)
    }
}

/// Paint a snapshot into an RGBA buffer of `options.width * options.height` pixels
pub fn render_rgba(snapshot: &LayoutSnapshot, options: &RasterOptions) -> Vec<u8> {
    paint(snapshot, options).pixels
}

fn paint(snapshot: &LayoutSnapshot, options: &RasterOptions) -> Canvas {
    let mut canvas = Canvas::new(options.width, options.height, options.background);
    if snapshot.columns.is_empty() {
        return canvas;
    }

    let geometry = GridGeometry::new(
        options.width as f32,
        options.height as f32,
        snapshot.columns.len(),
        options.metrics,
    );

    canvas.fill(geometry.time_header(), options.cell);
    for index in 0..snapshot.columns.len() {
        canvas.fill(geometry.header_cell(index), options.cell);
    }

    if geometry.time_body().height() <= 0.0 {
        return canvas;
    }
    canvas.fill(geometry.time_body(), options.cell);

    for (index, column) in snapshot.columns.iter().enumerate() {
        let cell = geometry.body_cell(index);
        canvas.fill(cell, options.cell);

        for offset in &snapshot.grid_lines {
            let y = geometry.body_y(*offset);
            let line = PixelRect {
                y0: y,
                y1: y + 1.0,
                ..cell
            };
            canvas.fill(line, options.grid_line);
        }

        for block in &column.blocks {
            let (r, g, b) = block.rgb;
            canvas.fill(geometry.block(index, block.position), [r, g, b, 0xff]);
        }
    }

    canvas
}

/// Encode an RGBA buffer as PNG
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba)?;
        writer.finish()?;
    }
    Ok(bytes)
}

/// Rasterize and encode in one step
pub fn render_png(snapshot: &LayoutSnapshot, options: &RasterOptions) -> Result<Vec<u8>, ExportError> {
    ExportSettings {
        width: options.width,
        height: options.height,
    }
    .validate()
    .map_err(ExportError::InvalidDimensions)?;

    let rgba = render_rgba(snapshot, options);
    encode_png(options.width, options.height, &rgba)
}
