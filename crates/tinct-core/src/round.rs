//! Numeric normalization applied when channel data leaves the conversion core.
//!
//! Conversion models keep full `f64` precision while they travel between
//! hubs. Rounding happens exactly once, when a channel is written into output
//! channel data, so chained conversions do not compound rounding error.

/// How a scaled value snaps to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingStrategy {
    /// Half away from zero.
    Round,
    Floor,
    Ceil,
}

/// Decimal places for percentage, degree and 0–255 channels.
pub const WHOLE_PLACES: u32 = 0;

/// Decimal places for alpha and the 0–1 style OKLCH channels.
pub const FRACTION_PLACES: u32 = 3;

/// Round `value` to `decimal_places` using `strategy`.
pub fn round_to(strategy: RoundingStrategy, decimal_places: u32, value: f64) -> f64 {
    let factor = 10_f64.powi(decimal_places as i32);
    let scaled = value * factor;
    let snapped = match strategy {
        RoundingStrategy::Round => scaled.round(),
        RoundingStrategy::Floor => scaled.floor(),
        RoundingStrategy::Ceil => scaled.ceil(),
    };
    snapped / factor
}

/// The output policy: round half away from zero, then drop the sign of `-0`.
pub fn round_channel(value: f64, decimal_places: u32) -> f64 {
    round_to(RoundingStrategy::Round, decimal_places, value).abs()
}

/// Clamp into `[min, max]` and round. `NaN` collapses to `min`.
///
/// Out-of-gamut hub values (e.g. a saturated OKLCH color mapped to sRGB)
/// land back inside the channel range here.
pub fn normalize_channel(value: f64, min: f64, max: f64, decimal_places: u32) -> f64 {
    if value.is_nan() {
        return round_channel(min, decimal_places);
    }
    round_channel(value.clamp(min, max), decimal_places)
}

/// Normalize an alpha value into `[0, 1]` at three decimal places.
pub fn normalize_alpha(alpha: f64) -> f64 {
    normalize_channel(alpha, 0.0, 1.0, FRACTION_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_strategies() {
        assert_eq!(round_to(RoundingStrategy::Round, 0, 2.5), 3.0);
        assert_eq!(round_to(RoundingStrategy::Floor, 0, 2.5), 2.0);
        assert_eq!(round_to(RoundingStrategy::Ceil, 0, 2.1), 3.0);
        assert_eq!(round_to(RoundingStrategy::Round, 3, 0.12345), 0.123);
        assert_eq!(round_to(RoundingStrategy::Round, 3, 0.6286), 0.629);
    }

    #[test]
    fn test_round_channel_drops_negative_zero() {
        let rounded = round_channel(-0.0001, 0);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_normalize_clamps_and_handles_nan() {
        assert_eq!(normalize_channel(256.4, 0.0, 255.0, 0), 255.0);
        assert_eq!(normalize_channel(-3.0, 0.0, 255.0, 0), 0.0);
        assert_eq!(normalize_channel(f64::NAN, 0.0, 360.0, 0), 0.0);
        assert_eq!(normalize_alpha(0.50049), 0.5);
    }
}
