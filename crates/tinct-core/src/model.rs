//! The conversion model, the one interchange format between channel data.
//!
//! A [`ConversionModel`] is tagged with the [`ColorMode`] its channels are
//! expressed in. Channels are raw `f64` values: never clamped, never rounded.
//!
//! | mode    | channels[0]     | channels[1]     | channels[2]     |
//! |---------|-----------------|-----------------|-----------------|
//! | `rgb`   | red 0–1         | green 0–1       | blue 0–1        |
//! | `hsl`   | hue (degrees)   | saturation 0–1  | lightness 0–1   |
//! | `hwb`   | hue (degrees)   | whiteness 0–1   | blackness 0–1   |
//! | `oklch` | lightness 0–1   | chroma          | hue (degrees)   |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Alpha for definitions that do not spell one out.
pub const OPAQUE: f64 = 1.0;

/// The color space a conversion model's channels are expressed in.
///
/// Tags other than the four the routers know are kept verbatim in
/// [`ColorMode::Other`]; the routers pass such models through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorMode {
    Rgb,
    Hsl,
    Hwb,
    Oklch,
    Other(String),
}

impl ColorMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
            Self::Oklch => "oklch",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for ColorMode {
    fn from(tag: &str) -> Self {
        match tag {
            "rgb" => Self::Rgb,
            "hsl" => Self::Hsl,
            "hwb" => Self::Hwb,
            "oklch" => Self::Oklch,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ColorMode {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ColorMode> for String {
    fn from(mode: ColorMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_alpha() -> f64 {
    OPAQUE
}

/// A transient, full-precision color value tagged with its mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionModel {
    pub mode: ColorMode,
    pub channels: [f64; 3],
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl ConversionModel {
    pub fn new(mode: ColorMode, channels: [f64; 3], alpha: f64) -> Self {
        Self {
            mode,
            channels,
            alpha,
        }
    }

    /// sRGB with channels in 0–1.
    pub fn rgb(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::new(ColorMode::Rgb, [red, green, blue], alpha)
    }

    /// HSL with hue in degrees, saturation and lightness in 0–1.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self::new(ColorMode::Hsl, [hue, saturation, lightness], alpha)
    }

    /// HWB with hue in degrees, whiteness and blackness in 0–1.
    pub fn hwb(hue: f64, whiteness: f64, blackness: f64, alpha: f64) -> Self {
        Self::new(ColorMode::Hwb, [hue, whiteness, blackness], alpha)
    }

    /// OKLCH with lightness in 0–1 and hue in degrees.
    pub fn oklch(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Self {
        Self::new(ColorMode::Oklch, [lightness, chroma, hue], alpha)
    }

    /// The same channels with a different alpha.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}
