//! Filled circle rasterization onto an RGBA buffer.

use image::{Rgba, RgbaImage};

/// Fill a circle of `radius` centered on the pixel-grid point `(cx, cy)`.
///
/// The center sits on the top-left corner of pixel `(cx, cy)`, the way a
/// canvas `arc(x, y, r)` call places it. A pixel is painted when its center
/// lies within `radius` of that point. No anti-aliasing is applied, so the
/// buffer only ever receives `color`. Pixels outside the buffer are clipped.
///
/// Returns the number of pixels written.
pub fn fill_circle(img: &mut RgbaImage, cx: u32, cy: u32, radius: f32, color: Rgba<u8>) -> u32 {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 || radius.is_nan() || radius <= 0.0 {
        return 0;
    }

    let r = f64::from(radius);
    let r_sq = r * r;
    let (cx, cy) = (f64::from(cx), f64::from(cy));

    // Pixel p is covered along an axis when |p + 0.5 - c| <= r
    let x_range = covered_span(cx, r, width);
    let y_range = covered_span(cy, r, height);
    let (Some((x0, x1)), Some((y0, y1))) = (x_range, y_range) else {
        return 0;
    };

    let mut written = 0;
    for py in y0..=y1 {
        let dy = f64::from(py) + 0.5 - cy;
        for px in x0..=x1 {
            let dx = f64::from(px) + 0.5 - cx;
            if dx * dx + dy * dy <= r_sq {
                img.put_pixel(px, py, color);
                written += 1;
            }
        }
    }
    written
}

/// Inclusive pixel index span whose centers fall within `r` of `c`, clipped to `[0, len)`.
fn covered_span(c: f64, r: f64, len: u32) -> Option<(u32, u32)> {
    let lo = (c - r - 0.5).ceil().max(0.0);
    let hi = (c + r - 0.5).floor().min(f64::from(len) - 1.0);
    if hi < lo {
        return None;
    }
    Some((lo as u32, hi as u32))
}
