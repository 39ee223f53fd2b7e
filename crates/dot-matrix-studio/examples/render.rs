//! Render the configured startup image and write it to the current directory.
//!
//! Reads `DOT_MATRIX_*` settings from the environment or a `.env` file.

use std::path::Path;

use dot_matrix_studio::{Studio, StudioConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = StudioConfig::load()?;
    let studio = Studio::start(&config).await?;

    if studio.output().is_none() {
        tracing::warn!("No startup image configured, nothing to export");
        return Ok(());
    }

    let path = studio.save(Path::new("."))?;
    tracing::info!(path = %path.display(), "Dot matrix written");
    Ok(())
}
