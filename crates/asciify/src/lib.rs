//! Image to ASCII-art conversion and glyph rasterization.
//!
//! [`AsciiEncoder`] turns a decoded image into an [`AsciiDocument`] (one glyph per pixel) and,
//! when asked, a [`ColorGrid`] holding every source color. [`GlyphRasterizer`] draws a document
//! back into an RGBA canvas with an embedded 8x8 font, optionally recoloring each glyph from the
//! grid. [`pipeline::convert`] chains both through files.

mod ascii;
mod config;
mod image_pipeline;
pub mod pipeline;
mod render;

use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};
use log::debug;

pub use ascii::{
    document::{read_document, write_document, AsciiDocument},
    gradient::Gradient,
    grid::ColorGrid,
    mapping::{luminance, GlyphMapper},
};
pub use config::RenderConfig;
pub use image_pipeline::{loader::load_image, writer::save_png};
pub use render::{font, rasterizer::GlyphRasterizer};

#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("failed to open {}", .path.display())]
    SourceOpen { path: PathBuf, source: io::Error },
    #[error("failed to decode image {}", .path.display())]
    Decode { path: PathBuf, source: image::ImageError },
    #[error("failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to create {}", .path.display())]
    SinkCreate { path: PathBuf, source: io::Error },
    #[error("failed to write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to encode {}", .path.display())]
    Encode { path: PathBuf, source: image::ImageError },
    #[error("failed to parse config {}", .path.display())]
    Config { path: PathBuf, source: toml::de::Error },
    #[error("invalid render config: {0}")]
    InvalidConfig(String),
    #[error("document has no lines to render")]
    EmptyDocument,
    #[error("color grid is {colors:?} but document is {document:?} (rows, columns)")]
    DimensionMismatch { document: (usize, usize), colors: (usize, usize) },
}

/// Output of [`AsciiEncoder::encode_image`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    pub document: AsciiDocument,
    /// Source colors, present only when color capture was requested.
    pub colors: Option<ColorGrid>,
}

#[derive(Clone, Debug, Default)]
pub struct AsciiEncoder {
    mapper: GlyphMapper,
}

impl AsciiEncoder {
    pub fn new(gradient: Gradient) -> Self {
        Self { mapper: GlyphMapper::new(gradient) }
    }

    pub fn encode_path<P: AsRef<Path>>(
        &self,
        path: P,
        capture_colors: bool,
    ) -> Result<Encoded, AsciiError> {
        let image = load_image(path)?;
        Ok(self.encode_image(&image, capture_colors))
    }

    /// Maps every pixel, row by row, to a glyph. Pixel `(x, y)` becomes character `x` of line `y`
    /// and, with `capture_colors`, cell `(y, x)` of the color grid.
    pub fn encode_image(&self, image: &DynamicImage, capture_colors: bool) -> Encoded {
        let (width, height) = image.dimensions();
        let rgba = image.to_rgba8();

        let mut document = AsciiDocument::default();
        let mut colors = capture_colors.then(|| ColorGrid::with_capacity(width, height));

        for y in 0..height {
            let mut line = String::with_capacity(width as usize);
            for x in 0..width {
                let pixel = *rgba.get_pixel(x, y);
                line.push(self.mapper.map_color(pixel));
                if let Some(grid) = colors.as_mut() {
                    grid.push(pixel);
                }
            }
            document.push_line(line);
        }

        debug!(
            "encoded {width}x{height} image into {} lines{}",
            document.height(),
            if capture_colors { " with color capture" } else { "" }
        );
        Encoded { document, colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn checkerboard() -> DynamicImage {
        let black = Rgba([0, 0, 0, 255]);
        let white = Rgba([255, 255, 255, 255]);
        let mut image = RgbaImage::from_pixel(2, 2, white);
        image.put_pixel(0, 0, black);
        image.put_pixel(1, 1, black);
        DynamicImage::ImageRgba8(image)
    }

    #[test]
    fn test_encode_dimensions() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(5, 3, Rgba([90, 90, 90, 255])));
        let encoded = AsciiEncoder::default().encode_image(&image, false);

        assert_eq!(encoded.document.height(), 3);
        assert!(encoded.document.lines().iter().all(|line| line.chars().count() == 5));
        assert!(encoded.colors.is_none());
    }

    #[test]
    fn test_encode_checkerboard_two_glyph_ramp() {
        let encoder = AsciiEncoder::new(Gradient::new("@ "));
        let encoded = encoder.encode_image(&checkerboard(), false);
        assert_eq!(encoded.document.to_text(), "@ \n @\n");
    }

    #[test]
    fn test_color_capture_matches_source_pixels() {
        let mut image = RgbaImage::new(3, 2);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8 * 80, y as u8 * 120, 7, 255]);
        }
        let image = DynamicImage::ImageRgba8(image);
        let encoded = AsciiEncoder::default().encode_image(&image, true);

        let grid = encoded.colors.expect("color capture requested");
        assert_eq!(grid.dimensions(), (2, 3));
        for row in 0..2u32 {
            for col in 0..3u32 {
                assert_eq!(
                    grid.get(row as usize, col as usize),
                    Some(image.get_pixel(col, row)),
                    "cell ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_grayscale_source_is_promoted() {
        let image = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(1, 1, image::Luma([0])));
        let encoded = AsciiEncoder::default().encode_image(&image, true);
        assert_eq!(encoded.document.lines()[0], "@");
        assert_eq!(encoded.colors.unwrap().get(0, 0), Some(Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_empty_image_gives_empty_document() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        let encoded = AsciiEncoder::default().encode_image(&image, true);
        assert!(encoded.document.is_empty());
        assert_eq!(encoded.colors.map(|grid| grid.cells.len()), Some(0));
    }

    #[test]
    fn test_checkerboard_renders_ink_on_diagonal() {
        let config = RenderConfig::default();
        let encoded = AsciiEncoder::new(Gradient::new("@ ")).encode_image(&checkerboard(), false);
        let canvas = GlyphRasterizer::new(config.clone()).render(&encoded.document, None).unwrap();

        assert_eq!(canvas.dimensions(), (2 * config.cell_width, 2 * config.cell_height));

        let background = Rgba([255, 255, 255, 255]);
        let text = Rgba([0, 0, 0, 255]);
        let cell = |row: u32, col: u32| {
            let mut pixels = Vec::new();
            for y in 0..config.cell_height {
                for x in 0..config.cell_width {
                    let (px, py) = (col * config.cell_width + x, row * config.cell_height + y);
                    pixels.push(*canvas.get_pixel(px, py));
                }
            }
            pixels
        };

        for (row, col) in [(0, 0), (1, 1)] {
            let pixels = cell(row, col);
            assert!(pixels.contains(&text));
            assert!(pixels.contains(&background));
            assert!(pixels.iter().all(|&p| p == text || p == background));
        }
        for (row, col) in [(0, 1), (1, 0)] {
            assert!(cell(row, col).iter().all(|&p| p == background));
        }
    }
}
