//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const IMAGE_URL: &str = "DOT_MATRIX_IMAGE_URL";
pub const SPACING: &str = "DOT_MATRIX_SPACING";
pub const RADIUS: &str = "DOT_MATRIX_RADIUS";
pub const EXPORT_NAME: &str = "DOT_MATRIX_EXPORT_NAME";
pub const FETCH_TIMEOUT_SECS: &str = "DOT_MATRIX_FETCH_TIMEOUT_SECS";

/// (key, default, description)
type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (
        IMAGE_URL,
        "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/image-zzaCSjW0h4ULfzFkW9woHqqoApX6YC.png",
        "Image loaded at startup (URL or file path)",
    ),
    (SPACING, "8", "Grid step between dots in pixels (4-20)"),
    (RADIUS, "2", "Dot radius in pixels (1-5, step 0.5)"),
    (EXPORT_NAME, "dot-matrix.png", "File name used for exports"),
    (FETCH_TIMEOUT_SECS, "30", "Timeout for remote image requests"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
