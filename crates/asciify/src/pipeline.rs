//! File-to-file conversion: image in, text document and rendered PNG out.

use std::path::PathBuf;

use log::info;

use crate::{
    read_document, save_png, write_document, AsciiEncoder, AsciiError, GlyphRasterizer,
    RenderConfig,
};

#[derive(Clone, Debug)]
pub struct ConversionPaths {
    pub source: PathBuf,
    pub text: PathBuf,
    pub image: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionReport {
    pub text: PathBuf,
    pub image: PathBuf,
    /// Document size as `(columns, rows)`.
    pub cells: (usize, usize),
    /// Canvas size in pixels as `(width, height)`.
    pub canvas: (u32, u32),
    pub colored: bool,
}

/// Runs one conversion with the standard ramp.
///
/// The rendered image is drawn from the document as read back from `paths.text`, so it reflects
/// exactly what was persisted. The color grid never touches disk.
pub fn convert(
    paths: &ConversionPaths,
    config: &RenderConfig,
) -> Result<ConversionReport, AsciiError> {
    convert_with(&AsciiEncoder::default(), paths, config)
}

pub fn convert_with(
    encoder: &AsciiEncoder,
    paths: &ConversionPaths,
    config: &RenderConfig,
) -> Result<ConversionReport, AsciiError> {
    config.validate().map_err(AsciiError::InvalidConfig)?;

    let encoded = encoder.encode_path(&paths.source, config.color_mode)?;
    write_document(&paths.text, &encoded.document)?;
    info!("wrote ascii document to {}", paths.text.display());

    let document = read_document(&paths.text)?;
    let canvas = GlyphRasterizer::new(config.clone()).render(&document, encoded.colors.as_ref())?;
    save_png(&paths.image, &canvas)?;
    info!("wrote rendered image to {}", paths.image.display());

    Ok(ConversionReport {
        text: paths.text.clone(),
        image: paths.image.clone(),
        cells: (document.width(), document.height()),
        canvas: canvas.dimensions(),
        colored: encoded.colors.is_some(),
    })
}
