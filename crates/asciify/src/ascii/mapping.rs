use image::Rgba;

use super::gradient::Gradient;

/// Maps pixel colors onto glyphs of a [`Gradient`].
#[derive(Clone, Debug, Default)]
pub struct GlyphMapper {
    gradient: Gradient,
}

impl GlyphMapper {
    pub fn new(gradient: Gradient) -> Self {
        Self { gradient }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn map_color(&self, color: Rgba<u8>) -> char {
        self.map_luminance(luminance(color))
    }

    pub fn map_luminance(&self, luma: u8) -> char {
        self.gradient.char_at(self.gradient.index_for(luma))
    }
}

/// BT.601 luma over alpha-premultiplied 16-bit channels, scaled back to 8 bits.
///
/// Channels are widened to 16 bits (`v * 0x101`) before premultiplying so translucent pixels
/// round the same way as a 16-bit color pipeline. A fully transparent pixel reads as black.
pub fn luminance(color: Rgba<u8>) -> u8 {
    let [r, g, b, a] = color.0;
    let alpha = u32::from(a) * 0x101;
    let premultiply = |channel: u8| u32::from(channel) * 0x101 * alpha / 0xffff;
    let (r, g, b) = (premultiply(r), premultiply(g), premultiply(b));
    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}
