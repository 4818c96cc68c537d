//! OKLCH channels. OKLCH is a hub, so conversion is renaming plus rounding.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ChannelsData;
use crate::dispatch::convert_conversion_model_to_oklch_color_space;
use crate::error::ValidationError;
use crate::model::ConversionModel;
use crate::round::{FRACTION_PLACES, normalize_alpha, normalize_channel};
use crate::validate::{
    ALPHA, ChannelRange, check_numeric_channels, hue, read_numeric_channels,
    validate_numeric_channels,
};

/// Largest chroma accepted in channel data.
pub const CHROMA_MAX: f64 = 0.4;

const SCHEMA: [ChannelRange; 4] = [
    ChannelRange::required("lightness", 0.0, 1.0),
    ChannelRange::required("chroma", 0.0, CHROMA_MAX),
    hue(),
    ALPHA,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct OklchChannels {
    lightness: f64,
    chroma: f64,
    hue: f64,
    alpha: f64,
}

impl OklchChannels {
    pub fn new(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Result<Self, ValidationError> {
        let [lightness, chroma, hue, alpha] =
            check_numeric_channels(&SCHEMA, [lightness, chroma, hue, alpha])?;
        Ok(Self {
            lightness,
            chroma,
            hue,
            alpha,
        })
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl TryFrom<Value> for OklchChannels {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        must_be_oklch_channels(&value)
    }
}

impl fmt::Display for OklchChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {}", self.lightness, self.chroma, self.hue)?;
        if self.alpha < 1.0 {
            write!(f, " / {}", self.alpha)?;
        }
        f.write_str(")")
    }
}

pub fn validate_oklch_channels(input: &Value) -> Result<&Value, ValidationError> {
    validate_numeric_channels(input, &SCHEMA)
}

pub fn must_be_oklch_channels(input: &Value) -> Result<OklchChannels, ValidationError> {
    let [lightness, chroma, hue, alpha] = read_numeric_channels(input, &SCHEMA)?;
    Ok(OklchChannels {
        lightness,
        chroma,
        hue,
        alpha,
    })
}

pub fn convert_oklch_channels_data_to_conversion_model(
    channels: &OklchChannels,
) -> ConversionModel {
    ConversionModel::oklch(channels.lightness, channels.chroma, channels.hue, channels.alpha)
}

pub fn convert_conversion_model_to_oklch_channels_data(model: &ConversionModel) -> OklchChannels {
    let oklch = convert_conversion_model_to_oklch_color_space(model.clone());
    let [lightness, chroma, hue] = oklch.channels;
    OklchChannels {
        lightness: normalize_channel(lightness, 0.0, 1.0, FRACTION_PLACES),
        chroma: normalize_channel(chroma, 0.0, CHROMA_MAX, FRACTION_PLACES),
        hue: normalize_channel(hue, 0.0, 360.0, FRACTION_PLACES),
        alpha: normalize_alpha(oklch.alpha),
    }
}

pub(crate) fn must_be_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    must_be_oklch_channels(input).map(ChannelsData::Oklch)
}

pub(crate) fn channels_data_from_conversion_model(model: &ConversionModel) -> ChannelsData {
    ChannelsData::Oklch(convert_conversion_model_to_oklch_channels_data(model))
}
