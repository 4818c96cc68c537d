//! Dispatch tables: hub routers and per-model converters.
//!
//! Two routers move any [`ConversionModel`] into one of the hub spaces, sRGB
//! or OKLCH. Each is a plain table lookup on the model's mode; a mode missing
//! from the table passes through unchanged. Adding a mode means adding one
//! entry per table, nothing else.
//!
//! The converter table maps every [`ColorModel`] to its strict validator and
//! its reverse converter, laid out in [`SUPPORTED_COLOR_MODELS`] order.
//!
//! [`SUPPORTED_COLOR_MODELS`]: crate::channels::SUPPORTED_COLOR_MODELS

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::channels::{ChannelsData, ColorModel, cmyk, hex, hsl, hsv, hwb, named, oklch, rgb};
use crate::error::ValidationError;
use crate::math;
use crate::model::{ColorMode, ConversionModel};

/// Moves a conversion model into a hub space.
pub type HubRoute = fn(ConversionModel) -> ConversionModel;

fn identity(model: ConversionModel) -> ConversionModel {
    model
}

fn with_channels(model: ConversionModel, mode: ColorMode, channels: [f64; 3]) -> ConversionModel {
    ConversionModel::new(mode, channels, model.alpha)
}

fn hsl_to_srgb(model: ConversionModel) -> ConversionModel {
    let channels = math::hsl_to_rgb(model.channels);
    with_channels(model, ColorMode::Rgb, channels)
}

fn hwb_to_srgb(model: ConversionModel) -> ConversionModel {
    let channels = math::hwb_to_rgb(model.channels);
    with_channels(model, ColorMode::Rgb, channels)
}

fn oklch_to_srgb(model: ConversionModel) -> ConversionModel {
    let channels = math::oklch_to_rgb(model.channels);
    with_channels(model, ColorMode::Rgb, channels)
}

fn srgb_to_oklch(model: ConversionModel) -> ConversionModel {
    let channels = math::rgb_to_oklch(model.channels);
    with_channels(model, ColorMode::Oklch, channels)
}

fn hsl_to_oklch(model: ConversionModel) -> ConversionModel {
    let channels = math::hsl_to_oklch(model.channels);
    with_channels(model, ColorMode::Oklch, channels)
}

fn hwb_to_oklch(model: ConversionModel) -> ConversionModel {
    let channels = math::hwb_to_oklch(model.channels);
    with_channels(model, ColorMode::Oklch, channels)
}

/// HSL and HWB inputs are converted here too, not passed through, so every
/// mode with a route leaves as `Rgb`. Only unknown modes pass through.
static SRGB_ROUTES: Lazy<HashMap<ColorMode, HubRoute>> = Lazy::new(|| {
    HashMap::from([
        (ColorMode::Rgb, identity as HubRoute),
        (ColorMode::Hsl, hsl_to_srgb),
        (ColorMode::Hwb, hwb_to_srgb),
        (ColorMode::Oklch, oklch_to_srgb),
    ])
});

static OKLCH_ROUTES: Lazy<HashMap<ColorMode, HubRoute>> = Lazy::new(|| {
    HashMap::from([
        (ColorMode::Oklch, identity as HubRoute),
        (ColorMode::Rgb, srgb_to_oklch),
        (ColorMode::Hsl, hsl_to_oklch),
        (ColorMode::Hwb, hwb_to_oklch),
    ])
});

fn route(
    table: &HashMap<ColorMode, HubRoute>,
    hub: &str,
    model: ConversionModel,
) -> ConversionModel {
    match table.get(&model.mode).copied() {
        Some(hop) => hop(model),
        None => {
            tracing::trace!("no {hub} route for mode `{}`, passing through", model.mode);
            model
        }
    }
}

/// Route `model` into the sRGB hub.
pub fn convert_conversion_model_to_srgb_color_space(model: ConversionModel) -> ConversionModel {
    route(&SRGB_ROUTES, "sRGB", model)
}

/// Route `model` into the OKLCH hub.
pub fn convert_conversion_model_to_oklch_color_space(model: ConversionModel) -> ConversionModel {
    route(&OKLCH_ROUTES, "OKLCH", model)
}

/// Validator and reverse converter for one supported model.
#[derive(Clone, Copy)]
pub struct ChannelConverter {
    pub model: ColorModel,
    pub must_be: fn(&Value) -> Result<ChannelsData, ValidationError>,
    pub from_conversion_model: fn(&ConversionModel) -> ChannelsData,
}

static CHANNEL_CONVERTERS: [ChannelConverter; 8] = [
    ChannelConverter {
        model: ColorModel::Cmyk,
        must_be: cmyk::must_be_channels_data,
        from_conversion_model: cmyk::channels_data_from_conversion_model,
    },
    ChannelConverter {
        model: ColorModel::CssNamedColor,
        must_be: named::must_be_channels_data,
        from_conversion_model: named::channels_data_from_conversion_model,
    },
    ChannelConverter {
        model: ColorModel::Hex,
        must_be: hex::must_be_channels_data,
        from_conversion_model: hex::channels_data_from_conversion_model,
    },
    ChannelConverter {
        model: ColorModel::Hsl,
        must_be: hsl::must_be_channels_data,
        from_conversion_model: hsl::channels_data_from_conversion_model,
    },
    ChannelConverter {
        model: ColorModel::Hsv,
        must_be: hsv::must_be_channels_data,
        from_conversion_model: hsv::channels_data_from_conversion_model,
    },
    ChannelConverter {
        model: ColorModel::Hwb,
        must_be: hwb::must_be_channels_data,
        from_conversion_model: hwb::channels_data_from_conversion_model,
    },
    ChannelConverter {
        model: ColorModel::Oklch,
        must_be: oklch::must_be_channels_data,
        from_conversion_model: oklch::channels_data_from_conversion_model,
    },
    ChannelConverter {
        model: ColorModel::Rgb,
        must_be: rgb::must_be_channels_data,
        from_conversion_model: rgb::channels_data_from_conversion_model,
    },
];

/// The converter entry for `model`.
pub fn channel_converter(model: ColorModel) -> &'static ChannelConverter {
    &CHANNEL_CONVERTERS[model.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::SUPPORTED_COLOR_MODELS;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_converter_table_follows_supported_order() {
        for model in SUPPORTED_COLOR_MODELS {
            assert_eq!(channel_converter(model).model, model);
        }
    }

    #[test]
    fn test_unknown_modes_pass_through_both_routers() {
        let lab = ColorMode::Other("lab".to_string());
        let model = ConversionModel::new(lab, [50.0, 20.0, -30.0], 0.3);
        assert_eq!(convert_conversion_model_to_srgb_color_space(model.clone()), model);
        assert_eq!(convert_conversion_model_to_oklch_color_space(model.clone()), model);
    }

    #[test]
    fn test_hub_identity() {
        let rgb = ConversionModel::rgb(0.1, 0.2, 0.3, 0.4);
        assert_eq!(convert_conversion_model_to_srgb_color_space(rgb.clone()), rgb);

        let oklch = ConversionModel::oklch(0.5, 0.1, 200.0, 0.4);
        assert_eq!(convert_conversion_model_to_oklch_color_space(oklch.clone()), oklch);
    }

    #[test]
    fn test_routes_preserve_alpha_and_retag() {
        let hsl = ConversionModel::hsl(120.0, 1.0, 0.5, 0.25);
        let srgb = convert_conversion_model_to_srgb_color_space(hsl.clone());
        assert_eq!(srgb.mode, ColorMode::Rgb);
        assert_eq!(srgb.alpha, 0.25);
        for (actual, expected) in srgb.channels.iter().zip([0.0, 1.0, 0.0]) {
            assert!((actual - expected).abs() < EPSILON);
        }

        let oklch = convert_conversion_model_to_oklch_color_space(hsl);
        assert_eq!(oklch.mode, ColorMode::Oklch);
        assert_eq!(oklch.alpha, 0.25);

        let hwb = ConversionModel::hwb(0.0, 0.0, 0.0, 1.0);
        let srgb = convert_conversion_model_to_srgb_color_space(hwb);
        assert_eq!(srgb.mode, ColorMode::Rgb);
        for (actual, expected) in srgb.channels.iter().zip([1.0, 0.0, 0.0]) {
            assert!((actual - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_oklch_hub_round_trip_keeps_full_precision() {
        let rgb = ConversionModel::rgb(0.25, 0.5, 0.75, 1.0);
        let back = convert_conversion_model_to_srgb_color_space(
            convert_conversion_model_to_oklch_color_space(rgb.clone()),
        );
        for (actual, expected) in back.channels.iter().zip(rgb.channels.iter()) {
            assert!((actual - expected).abs() < 1e-6);
        }
    }
}
