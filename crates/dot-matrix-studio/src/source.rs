//! Image sources: remote URLs, local files and in-memory bytes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use image::RgbaImage;
use reqwest::Client;
use tracing::{debug, info};

use crate::{Result, StudioError};

/// Where a source image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    File(PathBuf),
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Interpret a user-supplied reference: `http(s)://` is a URL, anything else a path.
    pub fn from_reference(reference: &str) -> Self {
        let trimmed = reference.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Fetch or read the source and decode it to RGBA.
    pub async fn load(&self, client: &Client) -> Result<RgbaImage> {
        match self {
            Self::Url(url) => fetch_url(client, url).await,
            Self::File(path) => load_file(path),
            Self::Bytes(bytes) => decode_bytes(bytes),
        }
    }
}

/// Build the HTTP client used for remote sources.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Decode encoded image bytes, sniffing the format from the content.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    debug!(
        width = img.width(),
        height = img.height(),
        "Decoded source image"
    );
    Ok(img)
}

/// Read and decode an image file.
pub fn load_file(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|source| StudioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = decode_bytes(&bytes)?;
    info!(path = %path.display(), "Loaded source image from file");
    Ok(img)
}

/// Download and decode a remote image. Non-success responses are errors.
pub async fn fetch_url(client: &Client, url: &str) -> Result<RgbaImage> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(StudioError::HttpStatus(status.as_u16()));
    }
    let bytes = resp.bytes().await?;
    let img = decode_bytes(&bytes)?;
    info!(url, "Loaded source image from URL");
    Ok(img)
}
