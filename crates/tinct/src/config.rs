//! Inspector configuration.

use serde::{Deserialize, Serialize};

/// Default OKLCH lightness at or above which a color counts as light.
const DEFAULT_SHADE_THRESHOLD: f64 = 0.6;
/// Default HSL saturation (percent) below which a color counts as gray.
const DEFAULT_GRAY_SATURATION: f64 = 10.0;

/// Thresholds used by [`crate::inspect`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// OKLCH lightness in [0, 1] separating dark from light shades.
    pub shade_threshold: f64,
    /// HSL saturation in [0, 100] under which hue is ignored.
    pub gray_saturation: f64,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            shade_threshold: env_or("TINCT_SHADE_THRESHOLD", DEFAULT_SHADE_THRESHOLD),
            gray_saturation: env_or("TINCT_GRAY_SATURATION", DEFAULT_GRAY_SATURATION),
        }
    }
}

fn env_or(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
