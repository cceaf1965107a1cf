use std::path::Path;

use image::Rgba;
use log::debug;
use serde::Deserialize;

use crate::AsciiError;

/// Parameters for drawing a document back into a raster image.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Horizontal advance per character cell in pixels.
    pub cell_width: u32,
    /// Vertical advance per line in pixels.
    pub cell_height: u32,
    /// Glyph color when no color grid is supplied, RGB.
    pub text_color: [u8; 3],
    /// Canvas fill, RGB.
    pub background_color: [u8; 3],
    /// Capture source colors while encoding and reuse them for each glyph.
    pub color_mode: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_width: 9,
            cell_height: 9,
            text_color: [0, 0, 0],
            background_color: [255, 255, 255],
            color_mode: false,
        }
    }
}

impl RenderConfig {
    /// Reads a TOML file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AsciiError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| AsciiError::SourceOpen { path: path.to_path_buf(), source })?;
        let config: RenderConfig = toml::from_str(&content)
            .map_err(|source| AsciiError::Config { path: path.to_path_buf(), source })?;
        config.validate().map_err(AsciiError::InvalidConfig)?;

        debug!("loaded render config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_width == 0 {
            return Err("cell_width must be at least 1".to_string());
        }
        if self.cell_height == 0 {
            return Err("cell_height must be at least 1".to_string());
        }
        Ok(())
    }

    pub(crate) fn text_rgba(&self) -> Rgba<u8> {
        let [r, g, b] = self.text_color;
        Rgba([r, g, b, 255])
    }

    pub(crate) fn background_rgba(&self) -> Rgba<u8> {
        let [r, g, b] = self.background_color;
        Rgba([r, g, b, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let config = RenderConfig { cell_width: 0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = RenderConfig { cell_height: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RenderConfig = toml::from_str(
            r#"
            cell_width = 12
            text_color = [200, 10, 10]
            "#,
        )
        .unwrap();

        assert_eq!(config.cell_width, 12);
        assert_eq!(config.cell_height, 9);
        assert_eq!(config.text_color, [200, 10, 10]);
        assert_eq!(config.background_color, [255, 255, 255]);
        assert!(!config.color_mode);
    }

    #[test]
    fn test_unknown_toml_field_rejected() {
        assert!(toml::from_str::<RenderConfig>("glyph_ramp = \"@ \"").is_err());
    }
}
