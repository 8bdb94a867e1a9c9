//! Style configuration shared by all scoreboards

use serde::Deserialize;

use crate::rendering::font::{Font, GLYPH_SIZE};
use crate::rendering::MAX_DIMENSION;
use crate::{Error, Result};

/// An sRGB color with straight (non-premultiplied) alpha
///
/// Deserializes from `[r, g, b]` (opaque) or `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "ColorRepr")]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);

    pub fn is_transparent(&self) -> bool {
        self.3 == 0
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.0, self.1, self.2, self.3)
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgba(r, g, b, 255)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Rgba(r, g, b, a)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl From<ColorRepr> for Rgba {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Rgb([r, g, b]) => Rgba(r, g, b, 255),
            ColorRepr::Rgba([r, g, b, a]) => Rgba(r, g, b, a),
        }
    }
}

/// Largest accepted font size in pixels
pub const MAX_FONT_SIZE: u32 = 1024;

/// Largest accepted spacing, margin or row height in pixels
pub const MAX_SPACING: u32 = 4096;

/// Font sizes in pixels. The bundled font is drawn at multiples of 8px, so
/// sizes are rounded down to the nearest multiple (minimum 8).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Rank, name and head-to-head team name size
    pub size: u32,
    /// Title size
    pub title_size: u32,
    /// Head-to-head score size
    pub score_size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: 32,
            title_size: 48,
            score_size: 64,
        }
    }
}

impl FontConfig {
    pub fn regular(&self) -> Font {
        Font::new(self.size)
    }

    pub fn bold(&self) -> Font {
        Font::bold(self.size)
    }

    pub fn title(&self) -> Font {
        Font::bold(self.title_size)
    }

    pub fn score(&self) -> Font {
        Font::new(self.score_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margins {
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            right: px,
            top: px,
            bottom: px,
        }
    }

    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::uniform(24)
    }
}

/// Style configuration captured by a scoreboard at construction time
///
/// Every field is optional when deserializing; missing fields take the
/// defaults below. Unknown fields are rejected.
///
/// # Examples
///
/// ```
/// use scoreboard::{Rgba, StyleConfig};
///
/// let style = StyleConfig {
///     title: Some("Ranking".to_string()),
///     fill_color: (241, 250, 238).into(),
///     ..Default::default()
/// };
/// assert_eq!(style.fill_color, Rgba(241, 250, 238, 255));
/// assert!(StyleConfig::default().fill_color.is_transparent());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Optional header drawn above the scoreboard
    pub title: Option<String>,
    /// Background color; transparent by default
    pub fill_color: Rgba,
    /// Names, ranks and title
    pub text_color: Rgba,
    /// Color of every other leaderboard row; falls back to `score_color`
    pub text_color_alternate: Option<Rgba>,
    /// Scores
    pub score_color: Rgba,
    /// Separators, the head-to-head divider and score outlines
    pub rectangle_color: Rgba,
    /// Draw horizontal separators between leaderboard rows
    pub separator: bool,
    pub separator_width: u32,
    /// Outline head-to-head scores with a rounded rectangle
    pub rectangle: bool,
    pub rectangle_margin: u32,
    pub font: FontConfig,
    /// Fixed canvas width; derived from content when unset
    pub width: Option<u32>,
    /// Fixed leaderboard row height; derived from the font when unset
    pub row_height: Option<u32>,
    pub margin: Margins,
    /// Vertical gap between leaderboard rows
    pub line_spacing: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: None,
            fill_color: Rgba(255, 249, 251, 0),
            text_color: Rgba(65, 101, 138, 255),
            text_color_alternate: None,
            score_color: Rgba(102, 143, 183, 255),
            rectangle_color: Rgba(102, 143, 183, 255),
            separator: true,
            separator_width: 3,
            rectangle: true,
            rectangle_margin: 16,
            font: FontConfig::default(),
            width: None,
            row_height: None,
            margin: Margins::default(),
            line_spacing: 16,
        }
    }
}

impl StyleConfig {
    /// Load a style from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let style: StyleConfig =
            serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Check the configuration for values that cannot produce an image
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("font.size", self.font.size),
            ("font.title_size", self.font.title_size),
            ("font.score_size", self.font.score_size),
        ];
        for (name, size) in sizes {
            if !(GLYPH_SIZE..=MAX_FONT_SIZE).contains(&size) {
                return Err(Error::config(format!(
                    "{name} must be between {GLYPH_SIZE} and {MAX_FONT_SIZE}px, got {size}"
                )));
            }
        }
        if let Some(width) = self.width {
            if !(1..=MAX_DIMENSION).contains(&width) {
                return Err(Error::config(format!(
                    "width must be between 1 and {MAX_DIMENSION}px, got {width}"
                )));
            }
        }
        if self.row_height == Some(0) {
            return Err(Error::config("row_height must be greater than zero"));
        }
        let spacings = [
            ("row_height", self.row_height.unwrap_or(0)),
            ("line_spacing", self.line_spacing),
            ("separator_width", self.separator_width),
            ("rectangle_margin", self.rectangle_margin),
            ("margin.left", self.margin.left),
            ("margin.right", self.margin.right),
            ("margin.top", self.margin.top),
            ("margin.bottom", self.margin.bottom),
        ];
        for (name, value) in spacings {
            if value > MAX_SPACING {
                return Err(Error::config(format!(
                    "{name} cannot exceed {MAX_SPACING}px, got {value}"
                )));
            }
        }
        if self.separator && self.separator_width > self.line_spacing {
            return Err(Error::config(format!(
                "separator_width ({}) cannot exceed line_spacing ({})",
                self.separator_width, self.line_spacing
            )));
        }
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(Error::config("title cannot be empty; omit it instead"));
        }
        Ok(())
    }

    /// Color used for the row at the given 0-based position
    pub fn row_color(&self, index: usize) -> Rgba {
        if index % 2 == 0 {
            self.text_color
        } else {
            self.text_color_alternate.unwrap_or(self.score_color)
        }
    }
}
