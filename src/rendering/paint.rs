/// Paint command set produced by scoreboard layouts

use crate::rendering::font::Font;
use crate::rendering::{raster, Canvas};
use crate::style::Rgba;
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgba,
    },
    /// Axis-aligned line segment `width` pixels thick, centered on the
    /// segment between the two points.
    Line {
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Rgba,
    },
    /// Text with its top-left corner at `(x, y)`
    Text {
        x: i32,
        y: i32,
        text: String,
        font: Font,
        color: Rgba,
    },
    RoundedRectOutline {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        radius: u32,
        stroke: u32,
        color: Rgba,
    },
}

impl PaintCommand {
    /// Horizontal line spanning `x0..x1` centered on `y`
    pub fn hline(x0: i32, x1: i32, y: i32, width: u32, color: Rgba) -> Self {
        PaintCommand::Line {
            from: (x0, y),
            to: (x1, y),
            width,
            color,
        }
    }

    /// Vertical line spanning `y0..y1` centered on `x`
    pub fn vline(x: i32, y0: i32, y1: i32, width: u32, color: Rgba) -> Self {
        PaintCommand::Line {
            from: (x, y0),
            to: (x, y1),
            width,
            color,
        }
    }

    pub fn text(x: i32, y: i32, text: impl Into<String>, font: Font, color: Rgba) -> Self {
        PaintCommand::Text {
            x,
            y,
            text: text.into(),
            font,
            color,
        }
    }
}

/// A laid-out scoreboard: canvas size, background and draw list
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub fill: Rgba,
    pub commands: Vec<PaintCommand>,
}

impl Scene {
    pub fn rasterize(&self) -> Result<Canvas> {
        raster::rasterize(self.width, self.height, self.fill, &self.commands)
    }

    /// Text commands in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&str, i32, i32)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            PaintCommand::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_helpers_are_axis_aligned() {
        let color = Rgba(255, 0, 0, 255);
        match PaintCommand::hline(0, 10, 5, 2, color) {
            PaintCommand::Line { from, to, .. } => assert_eq!(from.1, to.1),
            _ => panic!("unexpected"),
        }
        match PaintCommand::vline(3, 0, 10, 2, color) {
            PaintCommand::Line { from, to, .. } => assert_eq!(from.0, to.0),
            _ => panic!("unexpected"),
        }
    }

    #[test]
    fn scene_lists_texts_in_order() {
        let font = Font::new(8);
        let color = Rgba(0, 0, 0, 255);
        let scene = Scene {
            width: 10,
            height: 10,
            fill: Rgba::TRANSPARENT,
            commands: vec![
                PaintCommand::text(0, 0, "a", font, color),
                PaintCommand::hline(0, 10, 5, 1, color),
                PaintCommand::text(0, 8, "b", font, color),
            ],
        };
        let texts: Vec<&str> = scene.texts().map(|(t, _, _)| t).collect();
        assert_eq!(texts, ["a", "b"]);
        assert_eq!(scene.rasterize().unwrap().width(), 10);
    }
}
