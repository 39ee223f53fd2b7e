//! PNG export of rendered dot matrices.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::{Result, StudioError};

/// File name offered for downloads.
pub const DEFAULT_EXPORT_NAME: &str = "dot-matrix.png";

/// Encode an image as PNG bytes.
///
/// PNG is lossless, so decoding the bytes yields exactly the rendered pixels.
pub fn to_png_bytes(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(StudioError::Encode)?;
    Ok(cursor.into_inner())
}

/// Encode an image as PNG and write it to `path`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = to_png_bytes(image)?;
    std::fs::write(path, &bytes).map_err(|source| StudioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), size = bytes.len(), "Exported dot matrix");
    Ok(())
}
