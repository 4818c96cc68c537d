//! sRGB channels with 0–255 red, green and blue.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ChannelsData;
use crate::dispatch::convert_conversion_model_to_srgb_color_space;
use crate::error::ValidationError;
use crate::model::ConversionModel;
use crate::round::{WHOLE_PLACES, normalize_alpha, normalize_channel};
use crate::validate::{
    ALPHA, ChannelRange, check_numeric_channels, read_numeric_channels, validate_numeric_channels,
};

/// Upper bound of an 8-bit sRGB channel.
pub const RGB_MAX: f64 = 255.0;

const SCHEMA: [ChannelRange; 4] = [
    ChannelRange::required("red", 0.0, RGB_MAX),
    ChannelRange::required("green", 0.0, RGB_MAX),
    ChannelRange::required("blue", 0.0, RGB_MAX),
    ALPHA,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct RgbChannels {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl RgbChannels {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self, ValidationError> {
        let [red, green, blue, alpha] = check_numeric_channels(&SCHEMA, [red, green, blue, alpha])?;
        Ok(Self {
            red,
            green,
            blue,
            alpha,
        })
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl TryFrom<Value> for RgbChannels {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        must_be_rgb_channels(&value)
    }
}

impl fmt::Display for RgbChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({} {} {}", self.red, self.green, self.blue)?;
        if self.alpha < 1.0 {
            write!(f, " / {}", self.alpha)?;
        }
        f.write_str(")")
    }
}

/// Check `input` against the RGB schema and hand it back untouched.
pub fn validate_rgb_channels(input: &Value) -> Result<&Value, ValidationError> {
    validate_numeric_channels(input, &SCHEMA)
}

/// Validate `input` and read it into [`RgbChannels`].
pub fn must_be_rgb_channels(input: &Value) -> Result<RgbChannels, ValidationError> {
    let [red, green, blue, alpha] = read_numeric_channels(input, &SCHEMA)?;
    Ok(RgbChannels {
        red,
        green,
        blue,
        alpha,
    })
}

pub fn convert_rgb_channels_data_to_conversion_model(channels: &RgbChannels) -> ConversionModel {
    ConversionModel::rgb(
        channels.red / RGB_MAX,
        channels.green / RGB_MAX,
        channels.blue / RGB_MAX,
        channels.alpha,
    )
}

pub fn convert_conversion_model_to_rgb_channels_data(model: &ConversionModel) -> RgbChannels {
    let srgb = convert_conversion_model_to_srgb_color_space(model.clone());
    let [red, green, blue] = srgb.channels.map(scale_to_byte_range);
    RgbChannels {
        red,
        green,
        blue,
        alpha: normalize_alpha(srgb.alpha),
    }
}

/// 0–1 hub value → rounded, clamped 0–255 channel.
pub(crate) fn scale_to_byte_range(unit: f64) -> f64 {
    normalize_channel(unit * RGB_MAX, 0.0, RGB_MAX, WHOLE_PLACES)
}

pub(crate) fn must_be_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    must_be_rgb_channels(input).map(ChannelsData::Rgb)
}

pub(crate) fn channels_data_from_conversion_model(model: &ConversionModel) -> ChannelsData {
    ChannelsData::Rgb(convert_conversion_model_to_rgb_channels_data(model))
}
