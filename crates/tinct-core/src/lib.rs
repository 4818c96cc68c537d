//! Tinct Core: the conversion layer for CSS color models.
//!
//! Every supported model (cmyk, named keywords, hex, hsl, hsv, hwb, oklch,
//! rgb) has a validated channel record and a pair of converters to and from a
//! single [`ConversionModel`]. Conversions never go model-to-model: they hop
//! through one of two hubs, sRGB or OKLCH, selected by table dispatch.

pub mod channels;
pub mod dispatch;
pub mod error;
pub mod math;
pub mod model;
pub mod named_colors;
pub mod round;
pub mod validate;

// Re-exports for convenience.
pub use channels::cmyk::{
    CmykChannels, convert_cmyk_channels_data_to_conversion_model,
    convert_conversion_model_to_cmyk_channels_data, must_be_cmyk_channels, validate_cmyk_channels,
};
pub use channels::hex::{
    HexChannels, convert_conversion_model_to_hex_channels_data,
    convert_hex_channels_data_to_conversion_model, hex_to_conversion_model, must_be_hex_channels,
    validate_hex_channels,
};
pub use channels::hsl::{
    HslChannels, convert_conversion_model_to_hsl_channels_data,
    convert_hsl_channels_data_to_conversion_model, must_be_hsl_channels, validate_hsl_channels,
};
pub use channels::hsv::{
    HsvChannels, convert_conversion_model_to_hsv_channels_data,
    convert_hsv_channels_data_to_conversion_model, must_be_hsv_channels, validate_hsv_channels,
};
pub use channels::hwb::{
    HwbChannels, convert_conversion_model_to_hwb_channels_data,
    convert_hwb_channels_data_to_conversion_model, must_be_hwb_channels, validate_hwb_channels,
};
pub use channels::named::{
    NamedColorChannels, convert_conversion_model_to_named_color_channels_data,
    convert_named_color_channels_data_to_conversion_model, must_be_named_color_channels,
    validate_named_color_channels,
};
pub use channels::oklch::{
    OklchChannels, convert_conversion_model_to_oklch_channels_data,
    convert_oklch_channels_data_to_conversion_model, must_be_oklch_channels,
    validate_oklch_channels,
};
pub use channels::rgb::{
    RgbChannels, convert_conversion_model_to_rgb_channels_data,
    convert_rgb_channels_data_to_conversion_model, must_be_rgb_channels, validate_rgb_channels,
};
pub use channels::{ChannelsData, ColorModel, SUPPORTED_COLOR_MODELS, validate_channels_data};
pub use dispatch::{
    convert_conversion_model_to_oklch_color_space, convert_conversion_model_to_srgb_color_space,
};
pub use error::{ColorError, ValidationError};
pub use model::{ColorMode, ConversionModel};
