//! HWB channels: hue in degrees, whiteness and blackness in percent.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ChannelsData;
use crate::dispatch::convert_conversion_model_to_srgb_color_space;
use crate::error::ValidationError;
use crate::math;
use crate::model::{ColorMode, ConversionModel};
use crate::round::{WHOLE_PLACES, normalize_alpha, normalize_channel};
use crate::validate::{
    ALPHA, ChannelRange, check_numeric_channels, hue, percentage, read_numeric_channels,
    validate_numeric_channels,
};

const SCHEMA: [ChannelRange; 4] = [hue(), percentage("whiteness"), percentage("blackness"), ALPHA];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct HwbChannels {
    hue: f64,
    whiteness: f64,
    blackness: f64,
    alpha: f64,
}

impl HwbChannels {
    pub fn new(
        hue: f64,
        whiteness: f64,
        blackness: f64,
        alpha: f64,
    ) -> Result<Self, ValidationError> {
        let [hue, whiteness, blackness, alpha] =
            check_numeric_channels(&SCHEMA, [hue, whiteness, blackness, alpha])?;
        Ok(Self {
            hue,
            whiteness,
            blackness,
            alpha,
        })
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn whiteness(&self) -> f64 {
        self.whiteness
    }

    pub fn blackness(&self) -> f64 {
        self.blackness
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl TryFrom<Value> for HwbChannels {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        must_be_hwb_channels(&value)
    }
}

impl fmt::Display for HwbChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hwb({} {}% {}%", self.hue, self.whiteness, self.blackness)?;
        if self.alpha < 1.0 {
            write!(f, " / {}", self.alpha)?;
        }
        f.write_str(")")
    }
}

pub fn validate_hwb_channels(input: &Value) -> Result<&Value, ValidationError> {
    validate_numeric_channels(input, &SCHEMA)
}

pub fn must_be_hwb_channels(input: &Value) -> Result<HwbChannels, ValidationError> {
    let [hue, whiteness, blackness, alpha] = read_numeric_channels(input, &SCHEMA)?;
    Ok(HwbChannels {
        hue,
        whiteness,
        blackness,
        alpha,
    })
}

pub fn convert_hwb_channels_data_to_conversion_model(channels: &HwbChannels) -> ConversionModel {
    ConversionModel::hwb(
        channels.hue,
        channels.whiteness / 100.0,
        channels.blackness / 100.0,
        channels.alpha,
    )
}

/// HWB-tagged models are read directly; anything else goes through the sRGB
/// hub, clamped into gamut.
pub fn convert_conversion_model_to_hwb_channels_data(model: &ConversionModel) -> HwbChannels {
    let ([hue, whiteness, blackness], alpha) = match model.mode {
        ColorMode::Hwb => (model.channels, model.alpha),
        _ => {
            let srgb = convert_conversion_model_to_srgb_color_space(model.clone());
            let clamped = srgb.channels.map(|c| c.clamp(0.0, 1.0));
            (math::rgb_to_hwb(clamped), srgb.alpha)
        }
    };
    HwbChannels {
        hue: normalize_channel(hue, 0.0, 360.0, WHOLE_PLACES),
        whiteness: normalize_channel(whiteness * 100.0, 0.0, 100.0, WHOLE_PLACES),
        blackness: normalize_channel(blackness * 100.0, 0.0, 100.0, WHOLE_PLACES),
        alpha: normalize_alpha(alpha),
    }
}

pub(crate) fn must_be_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    must_be_hwb_channels(input).map(ChannelsData::Hwb)
}

pub(crate) fn channels_data_from_conversion_model(model: &ConversionModel) -> ChannelsData {
    ChannelsData::Hwb(convert_conversion_model_to_hwb_channels_data(model))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::channels::rgb::convert_conversion_model_to_rgb_channels_data;

    #[test]
    fn test_validate_rejects_missing_and_out_of_range() {
        let err = validate_hwb_channels(&json!({ "hue": 10, "whiteness": 5 })).unwrap_err();
        assert_eq!(err.path, "blackness");

        let err = validate_hwb_channels(&json!({ "hue": 10, "whiteness": 101, "blackness": 0 }))
            .unwrap_err();
        assert_eq!(err.path, "whiteness");
    }

    #[test]
    fn test_from_rgb_hub() {
        // rgb(255 128 0) → hwb(30 0% 0%)
        let model = ConversionModel::rgb(1.0, 128.0 / 255.0, 0.0, 1.0);
        let hwb = convert_conversion_model_to_hwb_channels_data(&model);
        assert_eq!(hwb, HwbChannels::new(30.0, 0.0, 0.0, 1.0).unwrap());

        let gray_model = ConversionModel::rgb(0.6, 0.6, 0.6, 1.0);
        let gray = convert_conversion_model_to_hwb_channels_data(&gray_model);
        assert_eq!((gray.whiteness(), gray.blackness()), (60.0, 40.0));
    }

    #[test]
    fn test_round_trip_is_stable() {
        let hwb = HwbChannels::new(300.0, 20.0, 35.0, 0.9).unwrap();
        let model = convert_hwb_channels_data_to_conversion_model(&hwb);
        assert_eq!(convert_conversion_model_to_hwb_channels_data(&model), hwb);
    }

    #[test]
    fn test_out_of_gamut_hub_values_match_rgb() {
        let model = ConversionModel::oklch(0.9, 0.4, 145.0, 1.0);
        let rgb = convert_conversion_model_to_rgb_channels_data(&model);
        let hwb = convert_conversion_model_to_hwb_channels_data(&model);
        assert!(hwb.whiteness() + hwb.blackness() <= 100.0);
        let back = convert_conversion_model_to_rgb_channels_data(
            &convert_hwb_channels_data_to_conversion_model(&hwb),
        );
        for (actual, expected) in [
            (back.red(), rgb.red()),
            (back.green(), rgb.green()),
            (back.blue(), rgb.blue()),
        ] {
            assert!((actual - expected).abs() <= 1.0, "{hwb} drifted from {rgb}");
        }
    }
}
