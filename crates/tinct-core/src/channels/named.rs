//! Named-color channels: a keyword from the CSS named-color table.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ChannelsData;
use super::hex::conversion_model_to_bytes;
use super::rgb::RGB_MAX;
use crate::error::ValidationError;
use crate::model::{ConversionModel, OPAQUE};
use crate::named_colors::{find_named_color, nearest_named_color};
use crate::validate::{expect_object, expect_string};

const EXPECTED: &str = "a CSS named color";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct NamedColorChannels {
    keyword: String,
    #[serde(skip_serializing)]
    bytes: [u8; 3],
}

impl NamedColorChannels {
    /// Look up `keyword` case-insensitively; the stored keyword is lower-case.
    pub fn new(keyword: &str) -> Result<Self, ValidationError> {
        let (name, bytes) = find_named_color(keyword)
            .ok_or_else(|| ValidationError::new("keyword", format!("\"{keyword}\""), EXPECTED))?;
        Ok(Self {
            keyword: name.to_string(),
            bytes,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn bytes(&self) -> [u8; 3] {
        self.bytes
    }
}

impl TryFrom<Value> for NamedColorChannels {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        must_be_named_color_channels(&value)
    }
}

impl fmt::Display for NamedColorChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword)
    }
}

pub fn validate_named_color_channels(input: &Value) -> Result<&Value, ValidationError> {
    let keyword = expect_string(expect_object(input)?, "keyword")?;
    if find_named_color(keyword).is_none() {
        return Err(ValidationError::new("keyword", format!("\"{keyword}\""), EXPECTED));
    }
    Ok(input)
}

pub fn must_be_named_color_channels(input: &Value) -> Result<NamedColorChannels, ValidationError> {
    let keyword = expect_string(expect_object(validate_named_color_channels(input)?)?, "keyword")?;
    NamedColorChannels::new(keyword)
}

pub fn convert_named_color_channels_data_to_conversion_model(
    channels: &NamedColorChannels,
) -> ConversionModel {
    let [red, green, blue] = channels.bytes.map(|b| f64::from(b) / RGB_MAX);
    ConversionModel::rgb(red, green, blue, OPAQUE)
}

/// The exact keyword for the color, or the nearest one in sRGB.
pub fn convert_conversion_model_to_named_color_channels_data(
    model: &ConversionModel,
) -> NamedColorChannels {
    let (name, bytes) = nearest_named_color(conversion_model_to_bytes(model));
    NamedColorChannels {
        keyword: name.to_string(),
        bytes,
    }
}

pub(crate) fn must_be_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    must_be_named_color_channels(input).map(ChannelsData::CssNamedColor)
}

pub(crate) fn channels_data_from_conversion_model(model: &ConversionModel) -> ChannelsData {
    ChannelsData::CssNamedColor(convert_conversion_model_to_named_color_channels_data(model))
}
