//! Render session: tracks the source and parameters, re-rendering on change.
//!
//! A rejected value (bad parameter, failed load) leaves the previous state
//! and the previous rendering in place.

use std::path::{Path, PathBuf};

use dot_matrix::{DotMatrixError, RenderParameters, render_dot_matrix};
use image::RgbaImage;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::StudioConfig;
use crate::export::{DEFAULT_EXPORT_NAME, save_png, to_png_bytes};
use crate::source::{ImageSource, http_client};
use crate::{Result, StudioError};

/// Holds the current source image, parameters and latest rendering.
#[derive(Debug, Clone)]
pub struct Studio {
    source: Option<RgbaImage>,
    params: RenderParameters,
    output: Option<RgbaImage>,
    export_name: String,
    renders: u64,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(RenderParameters::default())
    }
}

impl Studio {
    pub fn new(params: RenderParameters) -> Self {
        Self {
            source: None,
            params,
            output: None,
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            renders: 0,
        }
    }

    /// Build a studio from configuration without loading the configured image.
    pub fn from_config(config: &StudioConfig) -> Result<Self> {
        let mut studio = Self::new(config.parameters()?);
        studio.export_name = config.export_name.clone();
        Ok(studio)
    }

    /// Build a studio and load the configured startup image, if any.
    pub async fn start(config: &StudioConfig) -> Result<Self> {
        let mut studio = Self::from_config(config)?;
        if let Some(source) = config.image_source() {
            let client = http_client(config.fetch_timeout())?;
            studio.load(&client, &source).await?;
        }
        Ok(studio)
    }

    pub fn parameters(&self) -> RenderParameters {
        self.params
    }

    pub fn source(&self) -> Option<&RgbaImage> {
        self.source.as_ref()
    }

    /// Latest rendering, if a source has been loaded.
    pub fn output(&self) -> Option<&RgbaImage> {
        self.output.as_ref()
    }

    /// Number of renders performed so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn export_name(&self) -> &str {
        &self.export_name
    }

    /// Replace the source image and re-render.
    pub fn set_source(&mut self, image: RgbaImage) -> Result<&RgbaImage> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            warn!(width, height, "Rejected empty source image");
            return Err(DotMatrixError::EmptySource { width, height }.into());
        }
        self.source = Some(image);
        self.render().ok_or(StudioError::NothingRendered)
    }

    /// Load a source and re-render. On failure the current source is kept.
    pub async fn load(&mut self, client: &Client, source: &ImageSource) -> Result<&RgbaImage> {
        let image = source.load(client).await.inspect_err(|e| {
            warn!("Failed to load source image: {e}");
        })?;
        self.set_source(image)
    }

    /// Change the grid spacing. Returns whether a re-render happened.
    pub fn set_spacing(&mut self, spacing: u32) -> Result<bool> {
        let params = self.params.with_spacing(spacing).inspect_err(|e| {
            warn!("Rejected spacing: {e}");
        })?;
        Ok(self.set_parameters(params))
    }

    /// Change the dot radius. Returns whether a re-render happened.
    pub fn set_radius(&mut self, radius: f32) -> Result<bool> {
        let params = self.params.with_radius(radius).inspect_err(|e| {
            warn!("Rejected radius: {e}");
        })?;
        Ok(self.set_parameters(params))
    }

    /// Replace both parameters. Re-renders only when they differ from the current ones.
    pub fn set_parameters(&mut self, params: RenderParameters) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;
        self.render().is_some()
    }

    /// Render the current source with the current parameters.
    ///
    /// Without a source there is nothing to draw on; this is a no-op.
    pub fn render(&mut self) -> Option<&RgbaImage> {
        let Some(source) = self.source.as_ref() else {
            debug!("No source image loaded, skipping render");
            return None;
        };
        let output = render_dot_matrix(source, &self.params);
        self.renders += 1;
        self.output = Some(output);
        self.output.as_ref()
    }

    /// Encode the latest rendering as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        let output = self.output.as_ref().ok_or(StudioError::NothingRendered)?;
        to_png_bytes(output)
    }

    /// Write the latest rendering into `dir` under the export name.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let output = self.output.as_ref().ok_or(StudioError::NothingRendered)?;
        let path = dir.join(&self.export_name);
        save_png(output, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn bright_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([240, 240, 240, 255]))
    }

    fn count_white(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| **p == WHITE).count()
    }

    #[test]
    fn test_render_without_source_is_noop() {
        let mut studio = Studio::default();
        assert!(studio.render().is_none());
        assert!(studio.output().is_none());
        assert_eq!(studio.render_count(), 0);
        assert!(matches!(
            studio.export_png(),
            Err(StudioError::NothingRendered)
        ));
    }

    #[test]
    fn test_parameter_change_without_source_does_not_render() {
        let mut studio = Studio::default();
        assert!(!studio.set_spacing(10).unwrap());
        assert_eq!(studio.parameters().spacing(), 10);
        assert_eq!(studio.render_count(), 0);
    }

    #[test]
    fn test_set_source_renders() {
        let mut studio = Studio::default();
        let output = studio.set_source(bright_image(32, 24)).unwrap();
        assert_eq!(output.dimensions(), (32, 24));
        assert_eq!(studio.render_count(), 1);
    }

    #[test]
    fn test_set_source_rejects_empty() {
        let mut studio = Studio::default();
        studio.set_source(bright_image(8, 8)).unwrap();
        let err = studio.set_source(RgbaImage::new(0, 0)).unwrap_err();
        assert!(matches!(err, StudioError::Render(_)));
        assert_eq!(studio.source().unwrap().dimensions(), (8, 8));
    }

    #[test]
    fn test_rerender_only_on_change() {
        let mut studio = Studio::default();
        studio.set_source(bright_image(40, 40)).unwrap();

        assert!(!studio.set_spacing(8).unwrap());
        assert!(!studio.set_radius(2.0).unwrap());
        assert_eq!(studio.render_count(), 1);

        assert!(studio.set_spacing(10).unwrap());
        assert!(studio.set_radius(3.0).unwrap());
        assert_eq!(studio.render_count(), 3);
    }

    #[test]
    fn test_invalid_parameters_keep_previous_output() {
        let mut studio = Studio::default();
        studio.set_source(bright_image(40, 40)).unwrap();
        let before = studio.output().unwrap().clone();

        assert!(matches!(studio.set_spacing(0), Err(StudioError::Params(_))));
        assert!(matches!(studio.set_radius(-1.0), Err(StudioError::Params(_))));
        assert!(matches!(
            studio.set_radius(f32::NAN),
            Err(StudioError::Params(_))
        ));

        assert_eq!(studio.parameters(), RenderParameters::default());
        assert_eq!(studio.output().unwrap(), &before);
        assert_eq!(studio.render_count(), 1);
    }

    #[test]
    fn test_larger_radius_grows_output() {
        let mut studio = Studio::default();
        studio.set_source(bright_image(64, 64)).unwrap();
        let small = count_white(studio.output().unwrap());

        studio.set_radius(4.0).unwrap();
        let large = count_white(studio.output().unwrap());
        assert!(large > small);
    }

    #[test]
    fn test_from_config_uses_configured_values() {
        let config = StudioConfig {
            spacing: 5,
            radius: 1.5,
            export_name: "out.png".into(),
            ..StudioConfig::default()
        };
        let studio = Studio::from_config(&config).unwrap();
        assert_eq!(studio.parameters().spacing(), 5);
        assert_eq!(studio.parameters().radius(), 1.5);
        assert_eq!(studio.export_name(), "out.png");
    }

    #[test]
    fn test_export_matches_output() {
        let mut studio = Studio::default();
        studio.set_source(bright_image(20, 20)).unwrap();
        let bytes = studio.export_png().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(&decoded, studio.output().unwrap());
    }

    #[test]
    fn test_save_writes_export_name() {
        let dir = std::env::temp_dir().join(format!("dot-matrix-save-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut studio = Studio::default();
        studio.set_source(bright_image(16, 16)).unwrap();
        let path = studio.save(&dir).unwrap();

        assert_eq!(path, dir.join(DEFAULT_EXPORT_NAME));
        let saved = image::open(&path).unwrap().to_rgba8();
        assert_eq!(&saved, studio.output().unwrap());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_source() {
        let client = http_client(std::time::Duration::from_secs(5)).unwrap();
        let mut studio = Studio::default();
        studio.set_source(bright_image(10, 10)).unwrap();

        let err = studio
            .load(&client, &ImageSource::Bytes(b"garbage".to_vec()))
            .await
            .unwrap_err();
        assert!(matches!(err, StudioError::Decode(_)));
        assert_eq!(studio.source().unwrap().dimensions(), (10, 10));
        assert_eq!(studio.render_count(), 1);
    }

    #[tokio::test]
    async fn test_load_bytes_renders() {
        let client = http_client(std::time::Duration::from_secs(5)).unwrap();
        let png = to_png_bytes(&bright_image(12, 9)).unwrap();

        let mut studio = Studio::default();
        let output = studio.load(&client, &ImageSource::Bytes(png)).await.unwrap();
        assert_eq!(output.dimensions(), (12, 9));
    }

    #[tokio::test]
    async fn test_start_without_image_has_no_output() {
        let config = StudioConfig {
            image_url: String::new(),
            ..StudioConfig::default()
        };
        let studio = Studio::start(&config).await.unwrap();
        assert!(studio.source().is_none());
        assert!(studio.output().is_none());
        assert_eq!(studio.render_count(), 0);
    }

    #[tokio::test]
    async fn test_start_loads_configured_file() {
        let path = std::env::temp_dir().join(format!("dot-matrix-start-{}.png", std::process::id()));
        std::fs::write(&path, to_png_bytes(&bright_image(6, 6)).unwrap()).unwrap();

        let config = StudioConfig {
            image_url: path.display().to_string(),
            ..StudioConfig::default()
        };
        let studio = Studio::start(&config).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(studio.output().unwrap().dimensions(), (6, 6));
    }
}
