//! CMYK channels, expressed directly in RGB terms.
//!
//! There is no ink model here: cyan, magenta, yellow and key are the naive
//! subtractive complement of sRGB, and the conversion model is plain `rgb`.
//! CMYK carries no alpha; its conversion model is always opaque.
//!
//! ```text
//! red = 255 × (1 − cyan/100) × (1 − key/100)      (same for green, blue)
//!
//! key  = 1 − max(r, g, b)
//! cyan = (1 − r − key) / (1 − key)                 (0 when key = 1)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ChannelsData;
use crate::dispatch::convert_conversion_model_to_srgb_color_space;
use crate::error::ValidationError;
use crate::model::{ConversionModel, OPAQUE};
use crate::round::{WHOLE_PLACES, normalize_channel};
use crate::validate::{
    ChannelRange, check_numeric_channels, percentage, read_numeric_channels,
    validate_numeric_channels,
};

const SCHEMA: [ChannelRange; 4] = [
    percentage("cyan"),
    percentage("magenta"),
    percentage("yellow"),
    percentage("key"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct CmykChannels {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
}

impl CmykChannels {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<Self, ValidationError> {
        let [cyan, magenta, yellow, key] =
            check_numeric_channels(&SCHEMA, [cyan, magenta, yellow, key])?;
        Ok(Self {
            cyan,
            magenta,
            yellow,
            key,
        })
    }

    pub fn cyan(&self) -> f64 {
        self.cyan
    }

    pub fn magenta(&self) -> f64 {
        self.magenta
    }

    pub fn yellow(&self) -> f64 {
        self.yellow
    }

    pub fn key(&self) -> f64 {
        self.key
    }
}

impl TryFrom<Value> for CmykChannels {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        must_be_cmyk_channels(&value)
    }
}

impl fmt::Display for CmykChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "device-cmyk({}% {}% {}% {}%)",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

pub fn validate_cmyk_channels(input: &Value) -> Result<&Value, ValidationError> {
    validate_numeric_channels(input, &SCHEMA)
}

pub fn must_be_cmyk_channels(input: &Value) -> Result<CmykChannels, ValidationError> {
    let [cyan, magenta, yellow, key] = read_numeric_channels(input, &SCHEMA)?;
    Ok(CmykChannels {
        cyan,
        magenta,
        yellow,
        key,
    })
}

pub fn convert_cmyk_channels_data_to_conversion_model(channels: &CmykChannels) -> ConversionModel {
    let black = 1.0 - channels.key / 100.0;
    ConversionModel::rgb(
        (1.0 - channels.cyan / 100.0) * black,
        (1.0 - channels.magenta / 100.0) * black,
        (1.0 - channels.yellow / 100.0) * black,
        OPAQUE,
    )
}

pub fn convert_conversion_model_to_cmyk_channels_data(model: &ConversionModel) -> CmykChannels {
    let srgb = convert_conversion_model_to_srgb_color_space(model.clone());
    let [red, green, blue] = srgb.channels.map(|c| c.clamp(0.0, 1.0));

    let key = 1.0 - red.max(green).max(blue);
    let ink = |channel: f64| {
        if key >= 1.0 {
            0.0
        } else {
            (1.0 - channel - key) / (1.0 - key)
        }
    };
    let percent = |fraction: f64| normalize_channel(fraction * 100.0, 0.0, 100.0, WHOLE_PLACES);

    CmykChannels {
        cyan: percent(ink(red)),
        magenta: percent(ink(green)),
        yellow: percent(ink(blue)),
        key: percent(key),
    }
}

pub(crate) fn must_be_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    must_be_cmyk_channels(input).map(ChannelsData::Cmyk)
}

pub(crate) fn channels_data_from_conversion_model(model: &ConversionModel) -> ChannelsData {
    ChannelsData::Cmyk(convert_conversion_model_to_cmyk_channels_data(model))
}
