//! HSV channels and the hand-written HSV⇄RGB conversion.
//!
//! HSV is defined relative to RGB, so its conversion model is plain `rgb`
//! and it reaches OKLCH through the sRGB hub.
//!
//! # Algorithm
//! Forward, with `h` in sextants and `s`, `v` in 0–1:
//! ```text
//! max = v,  delta = max × s,  min = max − delta
//! f = h − floor(h)
//! sector 0 → (max, min + delta×f, min)    sector 3 → (min, max − delta×f, max)
//! sector 1 → (max − delta×f, max, min)    sector 4 → (min + delta×f, min, max)
//! sector 2 → (min, max, min + delta×f)    sector 5 → (max, min, max − delta×f)
//! ```
//! Reverse: `value = max(r, g, b)`, `saturation = delta / max` (0 for black),
//! hue from whichever channel is the maximum, shifted into `[0, 360)`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ChannelsData;
use crate::dispatch::convert_conversion_model_to_srgb_color_space;
use crate::error::ValidationError;
use crate::model::ConversionModel;
use crate::round::{WHOLE_PLACES, normalize_alpha, normalize_channel};
use crate::validate::{
    ALPHA, ChannelRange, check_numeric_channels, hue, percentage, read_numeric_channels,
    validate_numeric_channels,
};

const SCHEMA: [ChannelRange; 4] = [hue(), percentage("saturation"), percentage("value"), ALPHA];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct HsvChannels {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: f64,
}

impl HsvChannels {
    pub fn new(hue: f64, saturation: f64, value: f64, alpha: f64) -> Result<Self, ValidationError> {
        let [hue, saturation, value, alpha] =
            check_numeric_channels(&SCHEMA, [hue, saturation, value, alpha])?;
        Ok(Self {
            hue,
            saturation,
            value,
            alpha,
        })
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl TryFrom<Value> for HsvChannels {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        must_be_hsv_channels(&value)
    }
}

impl fmt::Display for HsvChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({} {}% {}%", self.hue, self.saturation, self.value)?;
        if self.alpha < 1.0 {
            write!(f, " / {}", self.alpha)?;
        }
        f.write_str(")")
    }
}

pub fn validate_hsv_channels(input: &Value) -> Result<&Value, ValidationError> {
    validate_numeric_channels(input, &SCHEMA)
}

pub fn must_be_hsv_channels(input: &Value) -> Result<HsvChannels, ValidationError> {
    let [hue, saturation, value, alpha] = read_numeric_channels(input, &SCHEMA)?;
    Ok(HsvChannels {
        hue,
        saturation,
        value,
        alpha,
    })
}

/// HSV (hue in degrees, saturation and value in 0–1) → sRGB in 0–1.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [f64; 3] {
    let max = value;
    let delta = max * saturation;
    let min = max - delta;

    let sextant = hue.rem_euclid(360.0) / 60.0;
    let sector = sextant.floor();
    let fraction = sextant - sector;
    let rising = min + delta * fraction;
    let falling = max - delta * fraction;

    match sector as u8 {
        0 => [max, rising, min],
        1 => [falling, max, min],
        2 => [min, max, rising],
        3 => [min, falling, max],
        4 => [rising, min, max],
        _ => [max, min, falling],
    }
}

/// sRGB in 0–1 → HSV with hue in `[0, 360)`, saturation and value in 0–1.
pub fn rgb_to_hsv([red, green, blue]: [f64; 3]) -> [f64; 3] {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    let mut hue = if delta == 0.0 {
        0.0
    } else if max == red {
        60.0 * ((green - blue) / delta)
    } else if max == green {
        60.0 * ((blue - red) / delta + 2.0)
    } else {
        60.0 * ((red - green) / delta + 4.0)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    [hue, saturation, max]
}

pub fn convert_hsv_channels_data_to_conversion_model(channels: &HsvChannels) -> ConversionModel {
    let [red, green, blue] = hsv_to_rgb(
        channels.hue,
        channels.saturation / 100.0,
        channels.value / 100.0,
    );
    ConversionModel::rgb(red, green, blue, channels.alpha)
}

pub fn convert_conversion_model_to_hsv_channels_data(model: &ConversionModel) -> HsvChannels {
    let srgb = convert_conversion_model_to_srgb_color_space(model.clone());
    let [hue, saturation, value] = rgb_to_hsv(srgb.channels.map(|c| c.clamp(0.0, 1.0)));
    HsvChannels {
        hue: normalize_channel(hue, 0.0, 360.0, WHOLE_PLACES),
        saturation: normalize_channel(saturation * 100.0, 0.0, 100.0, WHOLE_PLACES),
        value: normalize_channel(value * 100.0, 0.0, 100.0, WHOLE_PLACES),
        alpha: normalize_alpha(srgb.alpha),
    }
}

pub(crate) fn must_be_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    must_be_hsv_channels(input).map(ChannelsData::Hsv)
}

pub(crate) fn channels_data_from_conversion_model(model: &ConversionModel) -> ChannelsData {
    ChannelsData::Hsv(convert_conversion_model_to_hsv_channels_data(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::rgb::{RgbChannels, convert_conversion_model_to_rgb_channels_data};

    const EPSILON: f64 = 1e-12;

    fn to_rgb(hue: f64, saturation: f64, value: f64) -> RgbChannels {
        let hsv = HsvChannels::new(hue, saturation, value, 1.0).unwrap();
        let model = convert_hsv_channels_data_to_conversion_model(&hsv);
        convert_conversion_model_to_rgb_channels_data(&model)
    }

    fn rgb(red: f64, green: f64, blue: f64) -> RgbChannels {
        RgbChannels::new(red, green, blue, 1.0).unwrap()
    }

    #[test]
    fn test_every_sector_boundary() {
        assert_eq!(to_rgb(0.0, 100.0, 100.0), rgb(255.0, 0.0, 0.0));
        assert_eq!(to_rgb(60.0, 100.0, 100.0), rgb(255.0, 255.0, 0.0));
        assert_eq!(to_rgb(120.0, 100.0, 100.0), rgb(0.0, 255.0, 0.0));
        assert_eq!(to_rgb(180.0, 100.0, 100.0), rgb(0.0, 255.0, 255.0));
        assert_eq!(to_rgb(240.0, 100.0, 100.0), rgb(0.0, 0.0, 255.0));
        assert_eq!(to_rgb(300.0, 100.0, 100.0), rgb(255.0, 0.0, 255.0));
        assert_eq!(to_rgb(360.0, 100.0, 100.0), rgb(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_mid_sector_values() {
        // orange sits halfway through sector 0
        assert_eq!(to_rgb(30.0, 100.0, 100.0), rgb(255.0, 128.0, 0.0));
        assert_eq!(to_rgb(210.0, 50.0, 80.0), rgb(102.0, 153.0, 204.0));
        assert_eq!(to_rgb(0.0, 0.0, 50.0), rgb(128.0, 128.0, 128.0));
    }

    #[test]
    fn test_rgb_to_hsv_branches() {
        let cases = [
            ([1.0, 0.0, 0.0], [0.0, 1.0, 1.0]),
            ([0.0, 1.0, 0.0], [120.0, 1.0, 1.0]),
            ([0.0, 0.0, 1.0], [240.0, 1.0, 1.0]),
            ([1.0, 0.0, 1.0], [300.0, 1.0, 1.0]),
            ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ([0.5, 0.5, 0.5], [0.0, 0.0, 0.5]),
        ];
        for (rgb, expected) in cases {
            let hsv = rgb_to_hsv(rgb);
            for (a, e) in hsv.iter().zip(expected.iter()) {
                assert!((a - e).abs() < EPSILON, "{rgb:?} → {hsv:?}, expected {expected:?}");
            }
        }
    }

    #[test]
    fn test_round_trip_is_stable() {
        let cases = [
            (0.0, 100.0, 100.0),
            (45.0, 80.0, 60.0),
            (200.0, 35.0, 90.0),
            (330.0, 100.0, 20.0),
        ];
        for (h, s, v) in cases {
            let hsv = HsvChannels::new(h, s, v, 0.6).unwrap();
            let model = convert_hsv_channels_data_to_conversion_model(&hsv);
            assert_eq!(convert_conversion_model_to_hsv_channels_data(&model), hsv);
        }
    }

    #[test]
    fn test_full_turn_hue_comes_back_as_zero() {
        // HSV travels through RGB, where 360° and 0° are the same color.
        let full_turn = HsvChannels::new(360.0, 100.0, 100.0, 1.0).unwrap();
        let model = convert_hsv_channels_data_to_conversion_model(&full_turn);
        let back = convert_conversion_model_to_hsv_channels_data(&model);
        assert_eq!(back, HsvChannels::new(0.0, 100.0, 100.0, 1.0).unwrap());
        assert_eq!(to_rgb(360.0, 100.0, 100.0), to_rgb(0.0, 100.0, 100.0));
    }
}
