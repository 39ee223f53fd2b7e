//! Image to dot matrix transform.
//!
//! The source is probed at one pixel per grid cell. Samples brighter than
//! [`THRESHOLD`] get a white dot on an opaque black canvas of the same size.
//! Alpha is ignored and no averaging over the cell footprint is done.

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use crate::draw::fill_circle;
use crate::params::RenderParameters;
use crate::{BACKGROUND, DOT_COLOR, DotMatrixError, Result, THRESHOLD};

/// Mean of the red, green and blue channels. Alpha is not considered.
pub fn brightness(pixel: &Rgba<u8>) -> f32 {
    let [r, g, b, _] = pixel.0;
    (u16::from(r) + u16::from(g) + u16::from(b)) as f32 / 3.0
}

/// Whether a sample is bright enough to receive a dot.
pub fn is_lit(pixel: &Rgba<u8>) -> bool {
    brightness(pixel) > THRESHOLD
}

/// Grid sample points in row-major order, `spacing` apart, starting at the origin.
///
/// Only coordinates strictly inside `width` x `height` are produced.
pub fn sample_points(width: u32, height: u32, spacing: u32) -> impl Iterator<Item = (u32, u32)> {
    let step = spacing.max(1) as usize;
    (0..height)
        .step_by(step)
        .flat_map(move |y| (0..width).step_by(step).map(move |x| (x, y)))
}

/// Render `source` as a dot matrix.
///
/// The output always has the source's dimensions and is allocated fresh.
pub fn render_dot_matrix(source: &RgbaImage, params: &RenderParameters) -> RgbaImage {
    let (width, height) = source.dimensions();
    let spacing = params.spacing();
    let radius = params.radius();
    debug!(width, height, spacing, radius, "Rendering dot matrix");

    let mut output = RgbaImage::from_pixel(width, height, BACKGROUND);
    let mut dots = 0u32;
    for (x, y) in sample_points(width, height, spacing) {
        if is_lit(source.get_pixel(x, y)) {
            fill_circle(&mut output, x, y, radius, DOT_COLOR);
            dots += 1;
        }
    }

    debug!(dots, "Dot matrix render complete");
    output
}

/// Render any decoded image, rejecting images with no pixels.
pub fn render_dynamic(source: &DynamicImage, params: &RenderParameters) -> Result<RgbaImage> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(DotMatrixError::EmptySource { width, height });
    }
    Ok(render_dot_matrix(&source.to_rgba8(), params))
}

/// Validate raw parameter values, then render.
pub fn render_with(source: &RgbaImage, spacing: u32, radius: f32) -> Result<RgbaImage> {
    let params = RenderParameters::new(spacing, radius)?;
    Ok(render_dot_matrix(source, &params))
}
