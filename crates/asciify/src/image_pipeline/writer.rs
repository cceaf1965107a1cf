use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use log::debug;

use crate::AsciiError;

/// Encodes a rendered canvas as PNG.
pub fn save_png<P: AsRef<Path>>(path: P, canvas: &RgbaImage) -> Result<(), AsciiError> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|source| AsciiError::SinkCreate { path: path.to_path_buf(), source })?;

    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer)
        .write_image(canvas.as_raw(), canvas.width(), canvas.height(), ColorType::Rgba8)
        .map_err(|source| AsciiError::Encode { path: path.to_path_buf(), source })?;
    writer.flush().map_err(|source| AsciiError::Write { path: path.to_path_buf(), source })?;

    debug!("wrote {}x{} canvas to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}
