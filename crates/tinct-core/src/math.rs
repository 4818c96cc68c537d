//! Color math adapter over the `palette` crate.
//!
//! The core never does cylindrical or perceptual color math itself (HSV is
//! the one exception, see [`crate::channels::hsv`]). These functions marshal
//! plain channel triples into `palette` types, convert without clamping, and
//! unpack the result. Hues are returned as positive degrees in `[0, 360)`.

use palette::convert::FromColorUnclamped;
use palette::encoding;
use palette::{Hsl, Hwb, Oklch, Srgb};

type SrgbHsl = Hsl<encoding::Srgb, f64>;
type SrgbHwb = Hwb<encoding::Srgb, f64>;

fn srgb([red, green, blue]: [f64; 3]) -> Srgb<f64> {
    Srgb::new(red, green, blue)
}

fn components(rgb: Srgb<f64>) -> [f64; 3] {
    [rgb.red, rgb.green, rgb.blue]
}

fn hsl([hue, saturation, lightness]: [f64; 3]) -> SrgbHsl {
    SrgbHsl::new(hue, saturation, lightness)
}

/// CSS normalizes whiteness + blackness above 1 proportionally.
fn hwb([hue, whiteness, blackness]: [f64; 3]) -> SrgbHwb {
    let sum = whiteness + blackness;
    if sum > 1.0 {
        SrgbHwb::new(hue, whiteness / sum, blackness / sum)
    } else {
        SrgbHwb::new(hue, whiteness, blackness)
    }
}

fn oklch([lightness, chroma, hue]: [f64; 3]) -> Oklch<f64> {
    Oklch::new(lightness, chroma, hue)
}

fn unpack_oklch(color: Oklch<f64>) -> [f64; 3] {
    [color.l, color.chroma, color.hue.into_positive_degrees()]
}

/// sRGB → HSL.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let color = SrgbHsl::from_color_unclamped(srgb(rgb));
    [
        color.hue.into_positive_degrees(),
        color.saturation,
        color.lightness,
    ]
}

/// HSL → sRGB.
pub fn hsl_to_rgb(channels: [f64; 3]) -> [f64; 3] {
    components(Srgb::from_color_unclamped(hsl(channels)))
}

/// sRGB → HWB.
pub fn rgb_to_hwb(rgb: [f64; 3]) -> [f64; 3] {
    let color = SrgbHwb::from_color_unclamped(srgb(rgb));
    [
        color.hue.into_positive_degrees(),
        color.whiteness,
        color.blackness,
    ]
}

/// HWB → sRGB.
pub fn hwb_to_rgb(channels: [f64; 3]) -> [f64; 3] {
    components(Srgb::from_color_unclamped(hwb(channels)))
}

/// sRGB → OKLCH.
pub fn rgb_to_oklch(rgb: [f64; 3]) -> [f64; 3] {
    unpack_oklch(Oklch::from_color_unclamped(srgb(rgb)))
}

/// OKLCH → sRGB. Out-of-gamut colors yield channels outside 0–1.
pub fn oklch_to_rgb(channels: [f64; 3]) -> [f64; 3] {
    components(Srgb::from_color_unclamped(oklch(channels)))
}

/// HSL → OKLCH, without an intermediate rounding step.
pub fn hsl_to_oklch(channels: [f64; 3]) -> [f64; 3] {
    unpack_oklch(Oklch::from_color_unclamped(hsl(channels)))
}

/// HWB → OKLCH, without an intermediate rounding step.
pub fn hwb_to_oklch(channels: [f64; 3]) -> [f64; 3] {
    unpack_oklch(Oklch::from_color_unclamped(hwb(channels)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn assert_close(actual: [f64; 3], expected: [f64; 3], epsilon: f64) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < epsilon, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_hsl_primaries() {
        assert_close(hsl_to_rgb([0.0, 1.0, 0.5]), [1.0, 0.0, 0.0], EPSILON);
        assert_close(hsl_to_rgb([240.0, 1.0, 0.5]), [0.0, 0.0, 1.0], EPSILON);
        assert_close(rgb_to_hsl([0.0, 1.0, 0.0]), [120.0, 1.0, 0.5], EPSILON);
    }

    #[test]
    fn test_hwb_normalizes_excess_whiteness_and_blackness() {
        // w + b = 1.5 → gray at w / (w + b)
        let gray = hwb_to_rgb([90.0, 0.75, 0.75]);
        assert_close(gray, [0.5, 0.5, 0.5], EPSILON);
        assert_close(rgb_to_hwb([1.0, 0.0, 0.0]), [0.0, 0.0, 0.0], EPSILON);
    }

    #[test]
    fn test_oklch_reference_values() {
        // CSS Color 4 sample: sRGB red ≈ oklch(0.628 0.2577 29.23)
        let [l, c, h] = rgb_to_oklch([1.0, 0.0, 0.0]);
        assert!((l - 0.628).abs() < 1e-3, "lightness {l}");
        assert!((c - 0.2577).abs() < 1e-3, "chroma {c}");
        assert!((h - 29.23).abs() < 0.05, "hue {h}");

        assert_close(oklch_to_rgb(rgb_to_oklch([0.2, 0.4, 0.6])), [0.2, 0.4, 0.6], 1e-6);
    }

    #[test]
    fn test_direct_and_chained_oklch_agree() {
        let direct = hsl_to_oklch([200.0, 0.5, 0.4]);
        let chained = rgb_to_oklch(hsl_to_rgb([200.0, 0.5, 0.4]));
        assert_close(direct, chained, 1e-7);
    }
}
