//! Configuration: defaults, validation, loading from the environment.

pub mod defaults;
pub mod validation;

use std::time::Duration;

use dot_matrix::{ParamError, RenderParameters};

use crate::source::ImageSource;
use defaults::{DEFAULT_SETTINGS, EXPORT_NAME, FETCH_TIMEOUT_SECS, IMAGE_URL, RADIUS, SPACING};
use validation::validate_setting;

/// Startup configuration for a [`crate::Studio`].
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub image_url: String,
    pub spacing: u32,
    pub radius: f32,
    pub export_name: String,
    pub fetch_timeout_secs: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        let d = |key: &str| defaults::get_default(key).unwrap_or_default();
        Self {
            image_url: d(IMAGE_URL).to_string(),
            spacing: d(SPACING).parse().unwrap_or(dot_matrix::params::DEFAULT_SPACING),
            radius: d(RADIUS).parse().unwrap_or(dot_matrix::params::DEFAULT_RADIUS),
            export_name: d(EXPORT_NAME).to_string(),
            fetch_timeout_secs: d(FETCH_TIMEOUT_SECS).parse().unwrap_or(30),
        }
    }
}

impl StudioConfig {
    /// Load from `.env` (if present) and the process environment.
    pub fn load() -> Result<Self, anyhow::Error> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Unset keys take their default. Empty values also take the default,
    /// except for the image URL where an empty value disables the startup image.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| -> Result<String, anyhow::Error> {
            let def = DEFAULT_SETTINGS
                .get(key)
                .ok_or_else(|| anyhow::anyhow!("unknown setting key: {key}"))?;
            let value = match lookup(key).map(|v| v.trim().to_string()) {
                Some(v) if !v.is_empty() || key == IMAGE_URL => v,
                _ => def.default.to_string(),
            };
            validate_setting(key, &value)
                .map_err(|e| anyhow::anyhow!("validation error for {key}: {e}"))?;
            Ok(value)
        };

        let config = Self {
            image_url: get(IMAGE_URL)?,
            spacing: get(SPACING)?.parse()?,
            radius: get(RADIUS)?.parse()?,
            export_name: get(EXPORT_NAME)?,
            fetch_timeout_secs: get(FETCH_TIMEOUT_SECS)?.parse()?,
        };
        tracing::info!(
            spacing = config.spacing,
            radius = config.radius,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Initial render parameters.
    pub fn parameters(&self) -> Result<RenderParameters, ParamError> {
        RenderParameters::new(self.spacing, self.radius)
    }

    /// Image to load at startup, if one is configured.
    pub fn image_source(&self) -> Option<ImageSource> {
        if self.image_url.is_empty() {
            None
        } else {
            Some(ImageSource::from_reference(&self.image_url))
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}
