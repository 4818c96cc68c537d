//! HSL channels: hue in degrees, saturation and lightness in percent.

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

const SCHEMA: [ChannelRange; 4] = [hue(), percentage("saturation"), percentage("lightness"), ALPHA];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct HslChannels {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
}

impl HslChannels {
    pub fn new(
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    ) -> Result<Self, ValidationError> {
        let [hue, saturation, lightness, alpha] =
            check_numeric_channels(&SCHEMA, [hue, saturation, lightness, alpha])?;
        Ok(Self {
            hue,
            saturation,
            lightness,
            alpha,
        })
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl TryFrom<Value> for HslChannels {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        must_be_hsl_channels(&value)
    }
}

impl fmt::Display for HslChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} {}% {}%", self.hue, self.saturation, self.lightness)?;
        if self.alpha < 1.0 {
            write!(f, " / {}", self.alpha)?;
        }
        f.write_str(")")
    }
}

pub fn validate_hsl_channels(input: &Value) -> Result<&Value, ValidationError> {
    validate_numeric_channels(input, &SCHEMA)
}

pub fn must_be_hsl_channels(input: &Value) -> Result<HslChannels, ValidationError> {
    let [hue, saturation, lightness, alpha] = read_numeric_channels(input, &SCHEMA)?;
    Ok(HslChannels {
        hue,
        saturation,
        lightness,
        alpha,
    })
}

pub fn convert_hsl_channels_data_to_conversion_model(channels: &HslChannels) -> ConversionModel {
    ConversionModel::hsl(
        channels.hue,
        channels.saturation / 100.0,
        channels.lightness / 100.0,
        channels.alpha,
    )
}

/// HSL-tagged models are read directly so achromatic hues survive; anything
/// else goes through the sRGB hub, clamped into gamut like the RGB output.
pub fn convert_conversion_model_to_hsl_channels_data(model: &ConversionModel) -> HslChannels {
    let ([hue, saturation, lightness], alpha) = match model.mode {
        ColorMode::Hsl => (model.channels, model.alpha),
        _ => {
            let srgb = convert_conversion_model_to_srgb_color_space(model.clone());
            let clamped = srgb.channels.map(|c| c.clamp(0.0, 1.0));
            (math::rgb_to_hsl(clamped), srgb.alpha)
        }
    };
    HslChannels {
        hue: normalize_channel(hue, 0.0, 360.0, WHOLE_PLACES),
        saturation: normalize_channel(saturation * 100.0, 0.0, 100.0, WHOLE_PLACES),
        lightness: normalize_channel(lightness * 100.0, 0.0, 100.0, WHOLE_PLACES),
        alpha: normalize_alpha(alpha),
    }
}

pub(crate) fn must_be_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    must_be_hsl_channels(input).map(ChannelsData::Hsl)
}

pub(crate) fn channels_data_from_conversion_model(model: &ConversionModel) -> ChannelsData {
    ChannelsData::Hsl(convert_conversion_model_to_hsl_channels_data(model))
}
