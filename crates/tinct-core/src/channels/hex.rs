//! Hex channels: a canonical `#rrggbb` string.
//!
//! Three-digit shorthand is expanded on construction and the digits are
//! lower-cased, so `#FFF`, `#ffffff` and `#FFFFFF` produce equal values.
//! Alpha digits (`#rgba`, `#rrggbbaa`) are split off by the CSS parser
//! before channel data is built.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ChannelsData, ColorModel};
use crate::dispatch::convert_conversion_model_to_srgb_color_space;
use crate::error::{ColorError, ValidationError};
use crate::model::{ConversionModel, OPAQUE};
use crate::validate::{expect_object, expect_string};

use super::rgb::{RGB_MAX, scale_to_byte_range};

const EXPECTED: &str = "`#` followed by 3 or 6 hex digits";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct HexChannels {
    hex: String,
    #[serde(skip_serializing)]
    bytes: [u8; 3],
}

impl HexChannels {
    /// Accepts `#rgb` or `#rrggbb` in any case.
    pub fn new(hex: &str) -> Result<Self, ValidationError> {
        let bytes = expand_hex(hex).ok_or_else(|| {
            ValidationError::new("hex", format!("\"{hex}\""), EXPECTED)
        })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let [red, green, blue] = bytes;
        Self {
            hex: format!("#{red:02x}{green:02x}{blue:02x}"),
            bytes,
        }
    }

    /// The canonical lower-case `#rrggbb` form.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn bytes(&self) -> [u8; 3] {
        self.bytes
    }
}

impl TryFrom<Value> for HexChannels {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        must_be_hex_channels(&value)
    }
}

impl fmt::Display for HexChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Decode `#rrggbb`. Anything else, including shorthand, is rejected.
fn decode_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

/// Decode `#rgb` or `#rrggbb`.
fn expand_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        decode_hex(&format!("#{expanded}"))
    } else {
        decode_hex(hex)
    }
}

/// Parse a six-digit hex string straight into an `rgb` conversion model.
pub fn hex_to_conversion_model(hex: &str) -> Result<ConversionModel, ColorError> {
    let [red, green, blue] =
        decode_hex(hex).ok_or_else(|| ColorError::unsupported_conversion(hex, ColorModel::Hex))?;
    Ok(bytes_to_conversion_model([red, green, blue]))
}

fn bytes_to_conversion_model([red, green, blue]: [u8; 3]) -> ConversionModel {
    ConversionModel::rgb(
        f64::from(red) / RGB_MAX,
        f64::from(green) / RGB_MAX,
        f64::from(blue) / RGB_MAX,
        OPAQUE,
    )
}

/// Check that `input` is `{ "hex": "#rgb" | "#rrggbb" }` and hand it back.
pub fn validate_hex_channels(input: &Value) -> Result<&Value, ValidationError> {
    let hex = expect_string(expect_object(input)?, "hex")?;
    if expand_hex(hex).is_none() {
        return Err(ValidationError::new("hex", format!("\"{hex}\""), EXPECTED));
    }
    Ok(input)
}

pub fn must_be_hex_channels(input: &Value) -> Result<HexChannels, ValidationError> {
    let hex = expect_string(expect_object(validate_hex_channels(input)?)?, "hex")?;
    HexChannels::new(hex)
}

pub fn convert_hex_channels_data_to_conversion_model(channels: &HexChannels) -> ConversionModel {
    bytes_to_conversion_model(channels.bytes)
}

pub fn convert_conversion_model_to_hex_channels_data(model: &ConversionModel) -> HexChannels {
    HexChannels::from_bytes(conversion_model_to_bytes(model))
}

/// Rounded 0–255 sRGB bytes of any conversion model.
pub(crate) fn conversion_model_to_bytes(model: &ConversionModel) -> [u8; 3] {
    let srgb = convert_conversion_model_to_srgb_color_space(model.clone());
    srgb.channels.map(|unit| scale_to_byte_range(unit) as u8)
}

pub(crate) fn must_be_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    must_be_hex_channels(input).map(ChannelsData::Hex)
}

pub(crate) fn channels_data_from_conversion_model(model: &ConversionModel) -> ChannelsData {
    ChannelsData::Hex(convert_conversion_model_to_hex_channels_data(model))
}
