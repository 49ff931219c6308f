use image::RgbaImage;
use rusttype::{Font, Scale, point};

use crate::foundation::core::Rgb8;

/// Stamp `text` onto `img` left-anchored at `(x, y)`, blending glyph
/// coverage over the existing pixels.
///
/// `(x, y)` is the top-left anchor of the line box; the baseline sits one
/// ascent below it. Pixels falling outside the canvas are clipped.
pub fn draw_text(
    img: &mut RgbaImage,
    font: &Font<'_>,
    size: u32,
    x: u32,
    y: u32,
    color: Rgb8,
    text: &str,
) {
    let scale = Scale::uniform(size as f32);
    let v_metrics = font.v_metrics(scale);
    let mut caret_x = x as f32;
    let baseline_y = y as f32 + v_metrics.ascent;

    for ch in text.chars() {
        let glyph = font
            .glyph(ch)
            .scaled(scale)
            .positioned(point(caret_x, baseline_y));
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= img.width() || py >= img.height() {
                    return;
                }
                if coverage <= 0.0 {
                    return;
                }
                let sa = coverage.min(1.0);
                let inv = 1.0 - sa;
                let dst = img.get_pixel_mut(px, py);
                dst.0[0] = (f32::from(color.r) * sa + f32::from(dst.0[0]) * inv) as u8;
                dst.0[1] = (f32::from(color.g) * sa + f32::from(dst.0[1]) * inv) as u8;
                dst.0[2] = (f32::from(color.b) * sa + f32::from(dst.0[2]) * inv) as u8;
                dst.0[3] = 255;
            });
        }
        caret_x += glyph.unpositioned().h_metrics().advance_width;
    }
}
