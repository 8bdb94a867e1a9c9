//! Rendering pipeline: layouts emit paint commands, the rasterizer draws them
//! onto a [`Canvas`].

pub mod font;
pub mod paint;
pub mod raster;

use tiny_skia::Pixmap;

use crate::style::Rgba;
use crate::{Error, Result};

/// Largest canvas edge, in pixels, a layout may produce
pub const MAX_DIMENSION: u32 = 16_384;

/// Narrow a computed canvas edge to `u32`, rejecting anything past
/// [`MAX_DIMENSION`].
pub(crate) fn checked_dimension(what: &str, value: u64) -> Result<u32> {
    match u32::try_from(value) {
        Ok(v) if v <= MAX_DIMENSION => Ok(v),
        _ => Err(Error::RenderError(format!(
            "canvas {what} of {value}px exceeds the {MAX_DIMENSION}px limit"
        ))),
    }
}

/// In-memory RGBA raster surface a scoreboard is drawn onto
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a `width` x `height` canvas filled with `fill`
    pub fn new(width: u32, height: u32, fill: Rgba) -> Result<Self> {
        checked_dimension("width", width.into())?;
        checked_dimension("height", height.into())?;
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            Error::RenderError(format!("cannot allocate a {width}x{height} canvas"))
        })?;
        pixmap.fill(fill.to_skia());
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Straight-alpha RGBA bytes, row-major
    pub fn rgba_data(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Encode as an RGBA PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::EncodeError(e.to_string()))
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_filled() {
        let c = Canvas::new(4, 3, Rgba(10, 20, 30, 255)).unwrap();
        assert_eq!(c.width(), 4);
        assert_eq!(c.height(), 3);
        assert_eq!(c.pixel(3, 2), Some(Rgba(10, 20, 30, 255)));
        assert_eq!(c.pixel(4, 0), None);
        assert_eq!(c.pixel(0, 3), None);
        assert_eq!(c.pixel(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn pixel_does_not_wrap_into_the_next_row() {
        let mut c = Canvas::new(2, 2, Rgba::TRANSPARENT).unwrap();
        c.pixmap_mut().fill(Rgba(1, 2, 3, 255).to_skia());
        assert_eq!(c.pixel(1, 0), Some(Rgba(1, 2, 3, 255)));
        assert_eq!(c.pixel(2, 0), None);
        assert_eq!(c.pixel(3, 0), None);
    }

    #[test]
    fn rgba_data_is_straight_alpha() {
        let c = Canvas::new(2, 1, Rgba(9, 8, 7, 255)).unwrap();
        assert_eq!(c.rgba_data(), [9, 8, 7, 255, 9, 8, 7, 255]);
        let clear = Canvas::new(1, 1, Rgba(255, 249, 251, 0)).unwrap();
        assert_eq!(clear.rgba_data(), [0, 0, 0, 0]);
    }

    #[test]
    fn zero_sized_canvas_is_a_render_error() {
        assert!(matches!(
            Canvas::new(0, 10, Rgba::TRANSPARENT),
            Err(Error::RenderError(_))
        ));
    }

    #[test]
    fn oversized_canvas_is_a_render_error() {
        assert!(matches!(
            Canvas::new(MAX_DIMENSION + 1, 1, Rgba::TRANSPARENT),
            Err(Error::RenderError(_))
        ));
        assert!(checked_dimension("height", u64::MAX).is_err());
        assert_eq!(checked_dimension("height", 10).unwrap(), 10);
    }

    #[test]
    fn encodes_png_signature() {
        let c = Canvas::new(2, 2, Rgba::TRANSPARENT).unwrap();
        let png = c.encode_png().unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
