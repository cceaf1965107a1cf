/// Ordered glyph ramp, densest glyph first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    chars: Vec<char>,
}

impl Gradient {
    pub fn new(chars: impl Into<String>) -> Self {
        let chars: Vec<char> = chars.into().chars().collect();
        assert!(chars.len() >= 2, "gradient must contain at least two characters");
        Self { chars }
    }

    /// The ten-step ramp used for every conversion unless a caller supplies its own.
    pub fn standard() -> Self {
        Self::new("@%#*+=-:. ")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn densest(&self) -> char {
        self.chars[0]
    }

    pub fn lightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Quantizes an 8-bit luminance onto the ramp.
    ///
    /// `index = floor(luma * (N - 1) / 255)`, so 0 lands on the first glyph and 255 on the last.
    pub fn index_for(&self, luma: u8) -> usize {
        usize::from(luma) * (self.chars.len() - 1) / 255
    }

    pub fn char_at(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::standard()
    }
}
