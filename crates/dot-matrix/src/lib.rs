//! Dot matrix rendering for raster images.
//!
//! Samples an image on a regular grid and draws a white dot on a black
//! canvas at every sample point whose brightness passes a fixed threshold.

pub mod draw;
pub mod params;
pub mod transform;

// Re-exports for convenience
pub use draw::fill_circle;
pub use params::{ParamError, RenderParameters};
pub use transform::{
    brightness, is_lit, render_dot_matrix, render_dynamic, render_with, sample_points,
};

use image::Rgba;

/// Brightness a sample must strictly exceed to receive a dot.
pub const THRESHOLD: f32 = 128.0;

/// Canvas fill color.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Dot fill color.
pub const DOT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Errors that can occur while preparing a render.
#[derive(Debug, thiserror::Error)]
pub enum DotMatrixError {
    #[error("Invalid render parameters: {0}")]
    InvalidParameters(#[from] ParamError),

    #[error("Source image is empty ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
}

/// Result type alias for dot matrix operations.
pub type Result<T> = std::result::Result<T, DotMatrixError>;
