use image::{Pixel, Rgba, RgbaImage};
use log::debug;

use super::font::{self, GLYPH_SIZE};
use crate::ascii::document::AsciiDocument;
use crate::ascii::grid::ColorGrid;
use crate::config::RenderConfig;
use crate::AsciiError;

/// Draws documents into fixed-size glyph cells.
#[derive(Clone, Debug, Default)]
pub struct GlyphRasterizer {
    config: RenderConfig,
}

impl GlyphRasterizer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renders `document` onto a fresh canvas.
    ///
    /// With `colors`, each glyph takes the color captured for its cell; the grid must match the
    /// document's line count and longest line exactly. Lines shorter than the longest one leave
    /// their trailing cells as background.
    pub fn render(
        &self,
        document: &AsciiDocument,
        colors: Option<&ColorGrid>,
    ) -> Result<RgbaImage, AsciiError> {
        self.config.validate().map_err(AsciiError::InvalidConfig)?;

        let rows = document.height();
        let columns = document.width();
        if rows == 0 || columns == 0 {
            return Err(AsciiError::EmptyDocument);
        }

        if let Some(grid) = colors {
            if grid.dimensions() != (rows, columns) {
                return Err(AsciiError::DimensionMismatch {
                    document: (rows, columns),
                    colors: grid.dimensions(),
                });
            }
        }

        if !document.is_rectangular() {
            debug!("document lines are ragged, padding to {columns} columns");
        }

        let (width, height) = self.canvas_size(columns, rows)?;
        let mut canvas = RgbaImage::from_pixel(width, height, self.config.background_rgba());
        let text = self.config.text_rgba();

        for (row, line) in document.lines().iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let color = colors.and_then(|grid| grid.get(row, col)).unwrap_or(text);
                let anchor_x = col as u32 * self.config.cell_width;
                let anchor_y = row as u32 * self.config.cell_height;
                self.draw_glyph(&mut canvas, ch, anchor_x, anchor_y, color);
            }
        }

        debug!("rendered {columns}x{rows} cells onto a {width}x{height} canvas");
        Ok(canvas)
    }

    fn canvas_size(&self, columns: usize, rows: usize) -> Result<(u32, u32), AsciiError> {
        let scale = |cells: usize, cell: u32| u32::try_from(cells).ok()?.checked_mul(cell);
        match (scale(columns, self.config.cell_width), scale(rows, self.config.cell_height)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(AsciiError::InvalidConfig(format!(
                "{columns}x{rows} cells of {}x{} pixels overflow the canvas",
                self.config.cell_width, self.config.cell_height
            ))),
        }
    }

    /// Paints the set pixels of `ch` inside the cell anchored at `(x, y)`, clipped to the cell.
    fn draw_glyph(&self, canvas: &mut RgbaImage, ch: char, x: u32, y: u32, color: Rgba<u8>) {
        let glyph = font::glyph(ch);
        let clip_w = self.config.cell_width.min(GLYPH_SIZE);
        let clip_h = self.config.cell_height.min(GLYPH_SIZE);

        for dy in 0..clip_h {
            for dx in 0..clip_w {
                if !font::is_set(glyph, dx, dy) {
                    continue;
                }
                let pixel = canvas.get_pixel_mut(x + dx, y + dy);
                if color.0[3] == u8::MAX {
                    *pixel = color;
                } else {
                    pixel.blend(&color);
                }
            }
        }
    }
}
