//! Accessibility and classification helpers.
//!
//! Luminance and contrast follow WCAG 2.x. Alpha is ignored throughout: a
//! translucent color is judged as if it were opaque.
//!
//! # Reference
//!
//! - WCAG 2.2, relative luminance and contrast ratio definitions
//! - IEC 61966-2-1 sRGB transfer function

use serde::{Deserialize, Serialize};
use tinct_core::{
    ChannelsData, HexChannels, convert_conversion_model_to_oklch_color_space,
    convert_conversion_model_to_srgb_color_space,
};

use crate::color::Color;
use crate::config::InspectorConfig;

/// Rec. 709 luma coefficients for linear sRGB.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Flare term added to both luminances before dividing.
const CONTRAST_OFFSET: f64 = 0.05;

/// sRGB decoding per IEC 61966-2-1.
///
/// ```text
/// V <= 0.04045 → V / 12.92
/// V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
/// ```
fn srgb_to_linear(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1]: 0 for black, 1 for white.
pub fn relative_luminance(color: &Color) -> f64 {
    let srgb = convert_conversion_model_to_srgb_color_space(color.conversion_model().clone());
    srgb.channels
        .iter()
        .zip(LUMINANCE_WEIGHTS)
        .map(|(channel, weight)| srgb_to_linear(channel.clamp(0.0, 1.0)) * weight)
        .sum()
}

/// Contrast ratio in [1, 21]; the order of the arguments does not matter.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + CONTRAST_OFFSET) / (darker + CONTRAST_OFFSET)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSize {
    Normal,
    /// At least 18pt, or 14pt bold.
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WcagRating {
    Fail,
    Aa,
    Aaa,
}

/// Rate a contrast ratio against the WCAG success criteria for text.
///
/// | Text   | AA    | AAA |
/// |--------|-------|-----|
/// | normal | 4.5   | 7   |
/// | large  | 3     | 4.5 |
pub fn wcag_rating(ratio: f64, size: TextSize) -> WcagRating {
    let (aa, aaa) = match size {
        TextSize::Normal => (4.5, 7.0),
        TextSize::Large => (3.0, 4.5),
    };
    if ratio >= aaa {
        WcagRating::Aaa
    } else if ratio >= aa {
        WcagRating::Aa
    } else {
        WcagRating::Fail
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shade {
    Light,
    Dark,
}

/// Light or dark by OKLCH lightness against `config.shade_threshold`.
pub fn shade(color: &Color, config: &InspectorConfig) -> Shade {
    let oklch = convert_conversion_model_to_oklch_color_space(color.conversion_model().clone());
    if oklch.channels[0] >= config.shade_threshold {
        Shade::Light
    } else {
        Shade::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HueFamily {
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

/// Upper hue bound (exclusive) of each family, walking the wheel from red.
const HUE_FAMILIES: [(f64, HueFamily); 8] = [
    (15.0, HueFamily::Red),
    (45.0, HueFamily::Orange),
    (70.0, HueFamily::Yellow),
    (165.0, HueFamily::Green),
    (195.0, HueFamily::Cyan),
    (255.0, HueFamily::Blue),
    (315.0, HueFamily::Purple),
    (345.0, HueFamily::Pink),
];

/// Coarse hue family from HSL hue; gray when saturation is below
/// `config.gray_saturation`.
pub fn hue_family(color: &Color, config: &InspectorConfig) -> HueFamily {
    let hsl = color.hsl();
    if hsl.saturation() < config.gray_saturation {
        return HueFamily::Gray;
    }
    HUE_FAMILIES
        .iter()
        .find(|(bound, _)| hsl.hue() < *bound)
        .map_or(HueFamily::Red, |(_, family)| *family)
}

/// Black or white, whichever contrasts more with `background`.
pub fn readable_text_color(background: &Color) -> Color {
    let black = Color::from_channels(ChannelsData::Hex(HexChannels::from_bytes([0, 0, 0])));
    let white = Color::from_channels(ChannelsData::Hex(HexChannels::from_bytes([255, 255, 255])));
    if contrast_ratio(background, &black) >= contrast_ratio(background, &white) {
        black
    } else {
        white
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    fn color(definition: &str) -> Color {
        Color::parse(definition).unwrap()
    }

    fn config() -> InspectorConfig {
        InspectorConfig {
            shade_threshold: 0.6,
            gray_saturation: 10.0,
        }
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(&color("black")), 0.0);
        assert!((relative_luminance(&color("white")) - 1.0).abs() < EPSILON);
        assert!((relative_luminance(&color("red")) - 0.2126).abs() < EPSILON);
    }

    #[test]
    fn test_linear_segment() {
        assert!((srgb_to_linear(0.04045) - 0.04045 / 12.92).abs() < 1e-12);
        assert!((srgb_to_linear(0.5) - 0.21404).abs() < EPSILON);
    }

    #[test]
    fn test_contrast_bounds_and_symmetry() {
        let (black, white) = (color("#000"), color("#fff"));
        assert!((contrast_ratio(&black, &white) - 21.0).abs() < EPSILON);
        assert_eq!(contrast_ratio(&white, &white), 1.0);

        let gray = color("#777");
        assert_eq!(contrast_ratio(&gray, &white), contrast_ratio(&white, &gray));
        assert!((contrast_ratio(&gray, &white) - 4.48).abs() < 0.01);
    }

    #[test]
    fn test_wcag_thresholds() {
        assert_eq!(wcag_rating(7.0, TextSize::Normal), WcagRating::Aaa);
        assert_eq!(wcag_rating(4.5, TextSize::Normal), WcagRating::Aa);
        assert_eq!(wcag_rating(4.49, TextSize::Normal), WcagRating::Fail);
        assert_eq!(wcag_rating(4.5, TextSize::Large), WcagRating::Aaa);
        assert_eq!(wcag_rating(3.0, TextSize::Large), WcagRating::Aa);
        assert_eq!(wcag_rating(2.99, TextSize::Large), WcagRating::Fail);
    }

    #[test]
    fn test_shade() {
        assert_eq!(shade(&color("white"), &config()), Shade::Light);
        assert_eq!(shade(&color("yellow"), &config()), Shade::Light);
        assert_eq!(shade(&color("navy"), &config()), Shade::Dark);
        assert_eq!(shade(&color("black"), &config()), Shade::Dark);

        let strict = InspectorConfig {
            shade_threshold: 0.99,
            ..config()
        };
        assert_eq!(shade(&color("yellow"), &strict), Shade::Dark);
    }

    #[test]
    fn test_hue_families() {
        let cases = [
            ("gray", HueFamily::Gray),
            ("red", HueFamily::Red),
            ("orange", HueFamily::Orange),
            ("gold", HueFamily::Yellow),
            ("green", HueFamily::Green),
            ("teal", HueFamily::Cyan),
            ("blue", HueFamily::Blue),
            ("purple", HueFamily::Purple),
            ("hotpink", HueFamily::Pink),
            ("crimson", HueFamily::Red),
        ];
        for (name, expected) in cases {
            assert_eq!(hue_family(&color(name), &config()), expected, "{name}");
        }
    }

    #[test]
    fn test_readable_text_color() {
        assert_eq!(readable_text_color(&color("navy")).hex().hex(), "#ffffff");
        assert_eq!(readable_text_color(&color("yellow")).hex().hex(), "#000000");
    }
}
