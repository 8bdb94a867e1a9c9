/// Bundled 8x8 bitmap font, drawn at integer scales
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

/// Edge length of an unscaled glyph cell in pixels
pub const GLYPH_SIZE: u32 = 8;

const FALLBACK: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Requested size in pixels; rendered at the nearest lower multiple of 8
    pub size: u32,
    pub bold: bool,
}

impl Font {
    pub fn new(size: u32) -> Self {
        Self { size, bold: false }
    }

    pub fn bold(size: u32) -> Self {
        Self { size, bold: true }
    }

    pub fn scale(&self) -> u32 {
        (self.size / GLYPH_SIZE).max(1)
    }

    /// Width of one character cell
    pub fn advance(&self) -> u32 {
        GLYPH_SIZE * self.scale()
    }

    pub fn line_height(&self) -> u32 {
        GLYPH_SIZE * self.scale()
    }

    /// Saturates at `u32::MAX` for absurdly long text
    pub fn text_width(&self, text: &str) -> u32 {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        chars.saturating_mul(self.advance())
    }

    /// Horizontal offset of the second pass used to embolden glyphs
    pub fn bold_offset(&self) -> u32 {
        if self.bold {
            (self.scale() / 4).max(1)
        } else {
            0
        }
    }

    fn with_scale(self, scale: u32) -> Self {
        Self {
            size: scale * GLYPH_SIZE,
            bold: self.bold,
        }
    }

    /// Largest scale not above the current one at which `text` fits in
    /// `max_width`. Stops at scale 1 even if the text still overflows.
    pub fn fit_to_width(self, text: &str, max_width: u32) -> Self {
        if self.text_width(text) <= max_width {
            return self;
        }
        let chars = u64::try_from(text.chars().count()).unwrap_or(u64::MAX);
        let per_scale = chars.saturating_mul(GLYPH_SIZE.into());
        let fits = u64::from(max_width) / per_scale.max(1);
        let scale = u32::try_from(fits).unwrap_or(u32::MAX).clamp(1, self.scale());
        self.with_scale(scale)
    }
}

/// Bitmap rows for `c`, top to bottom; bit 0 is the leftmost pixel.
pub fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get(FALLBACK))
        .unwrap_or([0; 8])
}
