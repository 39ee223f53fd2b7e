//! Validated render parameters.

use std::num::NonZeroU32;

/// Default grid step in pixels.
pub const DEFAULT_SPACING: u32 = 8;

/// Default dot radius in pixels.
pub const DEFAULT_RADIUS: f32 = 2.0;

const DEFAULT_STEP: NonZeroU32 = NonZeroU32::new(DEFAULT_SPACING).unwrap();

/// Rejected parameter values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("spacing must be a positive integer, got {0}")]
    InvalidSpacing(u32),

    #[error("radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),
}

/// Grid spacing and dot radius for one render.
///
/// Can only be built through [`RenderParameters::new`], so a zero step or a
/// degenerate radius never reaches the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    spacing: NonZeroU32,
    radius: f32,
}

impl RenderParameters {
    pub fn new(spacing: u32, radius: f32) -> Result<Self, ParamError> {
        let spacing = NonZeroU32::new(spacing).ok_or(ParamError::InvalidSpacing(spacing))?;
        let radius = validate_radius(radius)?;
        Ok(Self { spacing, radius })
    }

    /// Grid step in pixels.
    pub fn spacing(&self) -> u32 {
        self.spacing.get()
    }

    /// Dot radius in pixels.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Copy with a different spacing.
    pub fn with_spacing(self, spacing: u32) -> Result<Self, ParamError> {
        Self::new(spacing, self.radius)
    }

    /// Copy with a different radius.
    pub fn with_radius(self, radius: f32) -> Result<Self, ParamError> {
        Self::new(self.spacing.get(), radius)
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_STEP,
            radius: DEFAULT_RADIUS,
        }
    }
}

fn validate_radius(radius: f32) -> Result<f32, ParamError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(ParamError::InvalidRadius(radius))
    }
}
