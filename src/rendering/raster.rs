/// Rasterizer: executes paint commands on a tiny-skia pixmap

use tiny_skia::{Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::rendering::font::{glyph, Font, GLYPH_SIZE};
use crate::rendering::paint::PaintCommand;
use crate::rendering::Canvas;
use crate::style::Rgba;
use crate::Result;

/// Draw `commands` in order onto a fresh canvas filled with `fill`
pub fn rasterize(width: u32, height: u32, fill: Rgba, commands: &[PaintCommand]) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height, fill)?;
    let pixmap = canvas.pixmap_mut();
    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect {
                x,
                y,
                width,
                height,
                color,
            } => fill_rect(pixmap, *x, *y, *width, *height, *color),
            PaintCommand::Line {
                from,
                to,
                width,
                color,
            } => draw_line(pixmap, *from, *to, *width, *color),
            PaintCommand::Text {
                x,
                y,
                text,
                font,
                color,
            } => draw_text(pixmap, *x, *y, text, *font, *color),
            PaintCommand::RoundedRectOutline {
                x,
                y,
                width,
                height,
                radius,
                stroke,
                color,
            } => {
                if let Some(path) = rounded_rect(*x, *y, *width, *height, *radius) {
                    let mut paint = solid(*color);
                    paint.anti_alias = true;
                    let stroke = Stroke {
                        width: *stroke as f32,
                        ..Stroke::default()
                    };
                    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                }
            }
        }
    }
    log::debug!(
        "rasterized {} paint commands onto {}x{} canvas",
        commands.len(),
        width,
        height
    );
    Ok(canvas)
}

fn solid(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = false;
    paint
}

fn fill_rect(pixmap: &mut Pixmap, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    // Degenerate rects are silently skipped
    if let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) {
        pixmap.fill_rect(rect, &solid(color), Transform::identity(), None);
    }
}

fn draw_line(pixmap: &mut Pixmap, from: (i32, i32), to: (i32, i32), width: u32, color: Rgba) {
    let half = (width / 2) as i32;
    if from.1 == to.1 {
        let x0 = from.0.min(to.0);
        let len = from.0.abs_diff(to.0);
        fill_rect(pixmap, x0, from.1 - half, len, width, color);
    } else if from.0 == to.0 {
        let y0 = from.1.min(to.1);
        let len = from.1.abs_diff(to.1);
        fill_rect(pixmap, from.0 - half, y0, width, len, color);
    } else {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0 as f32, from.1 as f32);
        pb.line_to(to.0 as f32, to.1 as f32);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: width as f32,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
        }
    }
}

fn draw_text(pixmap: &mut Pixmap, x: i32, y: i32, text: &str, font: Font, color: Rgba) {
    let scale = font.scale();
    let advance = font.advance() as i32;
    let offsets = [0, font.bold_offset()];
    let passes = if font.bold { &offsets[..] } else { &offsets[..1] };

    for (i, c) in text.chars().enumerate() {
        let cell_x = x + i as i32 * advance;
        for (row, bits) in glyph(c).iter().enumerate() {
            let py = y + (row as u32 * scale) as i32;
            // merge horizontal runs of lit pixels into single rects
            let mut col = 0u32;
            while col < GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_SIZE && bits & (1 << col) != 0 {
                    col += 1;
                }
                for &dx in passes {
                    let px = cell_x + (start * scale + dx) as i32;
                    fill_rect(pixmap, px, py, (col - start) * scale, scale, color);
                }
            }
        }
    }
}

fn rounded_rect(x: i32, y: i32, width: u32, height: u32, radius: u32) -> Option<Path> {
    let (x, y, w, h) = (x as f32, y as f32, width as f32, height as f32);
    let r = (radius as f32).min(w / 2.0).min(h / 2.0);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}
