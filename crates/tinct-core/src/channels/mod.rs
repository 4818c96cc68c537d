//! Channel data: one validated, immutable record per supported color model.

pub mod cmyk;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod hwb;
pub mod named;
pub mod oklch;
pub mod rgb;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dispatch;
use crate::error::{ROOT_PATH, ValidationError};
use crate::model::ConversionModel;
use crate::validate::{expect_object, expect_string};

pub use cmyk::CmykChannels;
pub use hex::HexChannels;
pub use hsl::HslChannels;
pub use hsv::HsvChannels;
pub use hwb::HwbChannels;
pub use named::NamedColorChannels;
pub use oklch::OklchChannels;
pub use rgb::RgbChannels;

/// Tag of a supported color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorModel {
    Cmyk,
    CssNamedColor,
    Hex,
    Hsl,
    Hsv,
    Hwb,
    Oklch,
    Rgb,
}

/// All supported models, in the order the dispatch tables are laid out.
pub const SUPPORTED_COLOR_MODELS: [ColorModel; 8] = [
    ColorModel::Cmyk,
    ColorModel::CssNamedColor,
    ColorModel::Hex,
    ColorModel::Hsl,
    ColorModel::Hsv,
    ColorModel::Hwb,
    ColorModel::Oklch,
    ColorModel::Rgb,
];

impl ColorModel {
    /// The tag as it appears in serialized data.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cmyk => "cmyk",
            Self::CssNamedColor => "cssNamedColor",
            Self::Hex => "hex",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Hwb => "hwb",
            Self::Oklch => "oklch",
            Self::Rgb => "rgb",
        }
    }

    pub fn all() -> &'static [Self] {
        &SUPPORTED_COLOR_MODELS
    }

    /// Position in [`SUPPORTED_COLOR_MODELS`] and the dispatch tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorModel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_COLOR_MODELS
            .iter()
            .copied()
            .find(|model| model.label() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    ROOT_PATH,
                    format!("\"{s}\""),
                    "one of cmyk, cssNamedColor, hex, hsl, hsv, hwb, oklch, rgb",
                )
            })
    }
}

/// Channel data of any supported model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", content = "channels", rename_all = "camelCase")]
pub enum ChannelsData {
    Cmyk(CmykChannels),
    CssNamedColor(NamedColorChannels),
    Hex(HexChannels),
    Hsl(HslChannels),
    Hsv(HsvChannels),
    Hwb(HwbChannels),
    Oklch(OklchChannels),
    Rgb(RgbChannels),
}

impl ChannelsData {
    pub fn model(&self) -> ColorModel {
        match self {
            Self::Cmyk(_) => ColorModel::Cmyk,
            Self::CssNamedColor(_) => ColorModel::CssNamedColor,
            Self::Hex(_) => ColorModel::Hex,
            Self::Hsl(_) => ColorModel::Hsl,
            Self::Hsv(_) => ColorModel::Hsv,
            Self::Hwb(_) => ColorModel::Hwb,
            Self::Oklch(_) => ColorModel::Oklch,
            Self::Rgb(_) => ColorModel::Rgb,
        }
    }

    /// Alpha carried by the channels; models without alpha are opaque.
    pub fn alpha(&self) -> f64 {
        self.to_conversion_model().alpha
    }

    pub fn to_conversion_model(&self) -> ConversionModel {
        match self {
            Self::Cmyk(c) => cmyk::convert_cmyk_channels_data_to_conversion_model(c),
            Self::CssNamedColor(c) => {
                named::convert_named_color_channels_data_to_conversion_model(c)
            }
            Self::Hex(c) => hex::convert_hex_channels_data_to_conversion_model(c),
            Self::Hsl(c) => hsl::convert_hsl_channels_data_to_conversion_model(c),
            Self::Hsv(c) => hsv::convert_hsv_channels_data_to_conversion_model(c),
            Self::Hwb(c) => hwb::convert_hwb_channels_data_to_conversion_model(c),
            Self::Oklch(c) => oklch::convert_oklch_channels_data_to_conversion_model(c),
            Self::Rgb(c) => rgb::convert_rgb_channels_data_to_conversion_model(c),
        }
    }

    /// Externalize `conversion_model` as channel data of `target`.
    pub fn from_conversion_model(target: ColorModel, conversion_model: &ConversionModel) -> Self {
        (dispatch::channel_converter(target).from_conversion_model)(conversion_model)
    }

    /// Convert to another model through the conversion model.
    pub fn convert_to(&self, target: ColorModel) -> Self {
        Self::from_conversion_model(target, &self.to_conversion_model())
    }
}

impl fmt::Display for ChannelsData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cmyk(c) => c.fmt(f),
            Self::CssNamedColor(c) => c.fmt(f),
            Self::Hex(c) => c.fmt(f),
            Self::Hsl(c) => c.fmt(f),
            Self::Hsv(c) => c.fmt(f),
            Self::Hwb(c) => c.fmt(f),
            Self::Oklch(c) => c.fmt(f),
            Self::Rgb(c) => c.fmt(f),
        }
    }
}

/// Validate a tagged definition `{ "model": "...", "channels": { ... } }`.
///
/// Errors inside the channels are reported under `channels.<field>`.
pub fn validate_channels_data(input: &Value) -> Result<ChannelsData, ValidationError> {
    let object = expect_object(input)?;
    let model: ColorModel = expect_string(object, "model")?
        .parse()
        .map_err(|err: ValidationError| err.nested("model"))?;
    let channels = object
        .get("channels")
        .ok_or_else(|| ValidationError::missing("channels", "an object"))?;

    let must_be = dispatch::channel_converter(model).must_be;
    must_be(channels).map_err(|err| err.nested("channels"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_supported_models_match_discriminants() {
        for (index, model) in SUPPORTED_COLOR_MODELS.iter().enumerate() {
            assert_eq!(model.index(), index);
            assert_eq!(model.label().parse::<ColorModel>(), Ok(*model));
        }
        assert!("lab".parse::<ColorModel>().is_err());
    }

    #[test]
    fn test_validate_tagged_definition() {
        let data = validate_channels_data(&json!({
            "model": "rgb",
            "channels": { "red": 255, "green": 0, "blue": 0 }
        }))
        .unwrap();
        assert_eq!(data, ChannelsData::Rgb(RgbChannels::new(255.0, 0.0, 0.0, 1.0).unwrap()));
    }

    #[test]
    fn test_validate_tagged_definition_reports_nested_paths() {
        let err = validate_channels_data(&json!({
            "model": "hsl",
            "channels": { "hue": 400, "saturation": 50, "lightness": 50 }
        }))
        .unwrap_err();
        assert_eq!(err.path, "channels.hue");

        let err = validate_channels_data(&json!({ "model": "lab", "channels": {} })).unwrap_err();
        assert_eq!(err.path, "model");

        let err = validate_channels_data(&json!({ "model": "hsv", "channels": 3 })).unwrap_err();
        assert_eq!(err.path, "channels");
    }

    #[test]
    fn test_serde_round_trips_through_validation() {
        let data = ChannelsData::Hsl(HslChannels::new(210.0, 40.0, 30.0, 0.25).unwrap());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["model"], "hsl");
        let back: ChannelsData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);

        let bad = json!({ "model": "rgb", "channels": { "red": 300, "green": 0, "blue": 0 } });
        assert!(serde_json::from_value::<ChannelsData>(bad).is_err());
    }
}
