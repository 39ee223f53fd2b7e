//! Setting value validation.
//!
//! Ranges here are the interactive control limits. The transform itself
//! accepts any positive spacing and radius.

use url::Url;

use super::defaults::{EXPORT_NAME, FETCH_TIMEOUT_SECS, IMAGE_URL, RADIUS, SPACING};

pub const SPACING_RANGE: (u32, u32) = (4, 20);
pub const RADIUS_RANGE: (f32, f32) = (1.0, 5.0);
pub const RADIUS_STEP: f32 = 0.5;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        SPACING => {
            let (min, max) = SPACING_RANGE;
            let v: u32 = value.parse().map_err(|_| "must be an integer")?;
            if !(min..=max).contains(&v) {
                return Err(format!("must be between {min} and {max}"));
            }
        }
        RADIUS => {
            let (min, max) = RADIUS_RANGE;
            let v: f32 = value.parse().map_err(|_| "must be a number")?;
            if !(min..=max).contains(&v) {
                return Err(format!("must be between {min} and {max}"));
            }
            if (v / RADIUS_STEP).fract() != 0.0 {
                return Err(format!("must be a multiple of {RADIUS_STEP}"));
            }
        }
        EXPORT_NAME => {
            if value.is_empty() || value.len() > 255 {
                return Err("file name must be 1-255 characters".into());
            }
            if value.contains(['/', '\\']) {
                return Err("must be a file name, not a path".into());
            }
            if !value.to_ascii_lowercase().ends_with(".png") {
                return Err("must end with .png".into());
            }
        }
        FETCH_TIMEOUT_SECS => {
            let v: u64 = value.parse().map_err(|_| "must be an integer")?;
            if !(1..=300).contains(&v) {
                return Err("must be between 1 and 300 seconds".into());
            }
        }
        IMAGE_URL => {
            if value.starts_with("http://") || value.starts_with("https://") {
                Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
            }
        }
        _ => {}
    }
    Ok(())
}
