//! Interactive front end for the dot matrix transform.
//!
//! Loads images from files, bytes or URLs, keeps the current spacing and
//! radius, re-renders whenever either of them or the source changes, and
//! exports the result as PNG.

pub mod config;
pub mod export;
pub mod session;
pub mod source;

// Re-exports for convenience
pub use config::StudioConfig;
pub use export::{DEFAULT_EXPORT_NAME, save_png, to_png_bytes};
pub use session::Studio;
pub use source::ImageSource;

use std::path::PathBuf;

use dot_matrix::{DotMatrixError, ParamError};
use tracing_subscriber::EnvFilter;

/// Errors surfaced to the caller while loading, rendering or exporting.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image request returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Rejected parameters: {0}")]
    Params(#[from] ParamError),

    #[error(transparent)]
    Render(#[from] DotMatrixError),

    #[error("Nothing has been rendered yet")]
    NothingRendered,
}

/// Result type alias for studio operations.
pub type Result<T> = std::result::Result<T, StudioError>;

/// Install the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
