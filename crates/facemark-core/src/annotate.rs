//! Face outline rasterization.
//!
//! Rectangles are drawn as unfilled 1-pixel borders directly in image
//! coordinates. Border pixels that fall outside the image are skipped
//! silently, so a box hanging off an edge still gets its visible part drawn.

use crate::types::{DetectedFace, FaceRectangle};
use image::{Rgba, RgbaImage};

/// Default outline color: opaque red.
pub const OUTLINE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Draw the border of `rect` onto `image`.
///
/// Rows `top` and `top + height` are set for every column from `left` to
/// `left + width` inclusive, and columns `left` and `left + width` for every
/// row from `top` to `top + height` inclusive. Corners are written twice.
/// A negative width or height draws nothing along the affected axis.
pub fn draw_outline(image: &mut RgbaImage, rect: &FaceRectangle, color: Rgba<u8>) {
    let (left, top) = (rect.left as i64, rect.top as i64);
    let (right, bottom) = (rect.right(), rect.bottom());

    for y in [top, bottom] {
        hline(image, left, right, y, color);
    }
    for x in [left, right] {
        vline(image, x, top, bottom, color);
    }

    if !fits(image, rect) {
        tracing::debug!(?rect, width = image.width(), height = image.height(), "outline clipped");
    }
}

/// Draw every face outline in response order; later outlines overwrite
/// earlier ones where they cross.
pub fn draw_all(image: &mut RgbaImage, faces: &[DetectedFace], color: Rgba<u8>) {
    for face in faces {
        tracing::debug!(rect = ?face.face_rectangle, "drawing face outline");
        draw_outline(image, &face.face_rectangle, color);
    }
}

/// Set pixels `(x, y)` for `x` in `x0..=x1`, restricted to the image.
fn hline(image: &mut RgbaImage, x0: i64, x1: i64, y: i64, color: Rgba<u8>) {
    let (w, h) = (image.width() as i64, image.height() as i64);
    if y < 0 || y >= h {
        return;
    }
    for x in x0.max(0)..=x1.min(w - 1) {
        image.put_pixel(x as u32, y as u32, color);
    }
}

/// Set pixels `(x, y)` for `y` in `y0..=y1`, restricted to the image.
fn vline(image: &mut RgbaImage, x: i64, y0: i64, y1: i64, color: Rgba<u8>) {
    let (w, h) = (image.width() as i64, image.height() as i64);
    if x < 0 || x >= w {
        return;
    }
    for y in y0.max(0)..=y1.min(h - 1) {
        image.put_pixel(x as u32, y as u32, color);
    }
}

fn fits(image: &RgbaImage, rect: &FaceRectangle) -> bool {
    rect.left >= 0
        && rect.top >= 0
        && rect.right() < image.width() as i64
        && rect.bottom() < image.height() as i64
}
