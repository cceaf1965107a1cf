use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::AsciiError;

/// Opens and decodes an image, sniffing the container format from its leading bytes.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, AsciiError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| AsciiError::SourceOpen { path: path.to_path_buf(), source })?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| AsciiError::Read { path: path.to_path_buf(), source })?;

    let image =
        reader.decode().map_err(|source| AsciiError::Decode { path: path.to_path_buf(), source })?;

    let (w, h) = image.dimensions();
    debug!("decoded source image {}x{} from {}", w, h, path.display());
    Ok(image)
}
