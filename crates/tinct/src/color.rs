//! The [`Color`] value object.

use std::fmt;
use std::str::FromStr;

use tinct_core::{
    ChannelsData, CmykChannels, ColorError, ColorModel, ConversionModel, HexChannels, HslChannels,
    HsvChannels, HwbChannels, NamedColorChannels, OklchChannels, RgbChannels,
    convert_conversion_model_to_cmyk_channels_data, convert_conversion_model_to_hex_channels_data,
    convert_conversion_model_to_hsl_channels_data, convert_conversion_model_to_hsv_channels_data,
    convert_conversion_model_to_hwb_channels_data,
    convert_conversion_model_to_named_color_channels_data,
    convert_conversion_model_to_oklch_channels_data, convert_conversion_model_to_rgb_channels_data,
};

use crate::cache::Memo;
use crate::parse;

/// An immutable color, readable in every supported model.
///
/// A color remembers the channel data it was built from and converts lazily:
/// the first request for a model runs the conversion, later requests reuse
/// it. Asking for the source model returns the source data untouched.
///
/// ```
/// use tinct::Color;
///
/// let teal: Color = "#008080".parse().unwrap();
/// assert_eq!(teal.named().keyword(), "teal");
/// assert_eq!(teal.rgb().to_string(), "rgb(0 128 128)");
/// ```
pub struct Color {
    source: ChannelsData,
    model: ConversionModel,
    conversions: Memo<ColorModel, ChannelsData>,
}

macro_rules! channels_accessor {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $channels:ty, $convert:path) => {
        $(#[$doc])*
        pub fn $name(&self) -> $channels {
            match self.to(ColorModel::$variant) {
                ChannelsData::$variant(channels) => channels,
                _ => $convert(&self.model),
            }
        }
    };
}

impl Color {
    /// Build a color from validated channel data.
    pub fn from_channels(source: ChannelsData) -> Self {
        let model = source.to_conversion_model();
        Self::with_model(source, model)
    }

    /// Parse any supported CSS definition.
    pub fn parse(definition: &str) -> Result<Self, ColorError> {
        let parse::Definition { channels, alpha } = parse::parse(definition)?;
        let model = channels.to_conversion_model().with_alpha(alpha);
        Ok(Self::with_model(channels, model))
    }

    fn with_model(source: ChannelsData, model: ConversionModel) -> Self {
        Self {
            source,
            model,
            conversions: Memo::new(),
        }
    }

    /// The channel data this color was built from.
    pub fn source(&self) -> &ChannelsData {
        &self.source
    }

    /// The model this color was defined in.
    pub fn format(&self) -> ColorModel {
        self.source.model()
    }

    pub fn alpha(&self) -> f64 {
        self.model.alpha
    }

    pub fn conversion_model(&self) -> &ConversionModel {
        &self.model
    }

    /// Channel data in `target`, converted at most once per color.
    pub fn to(&self, target: ColorModel) -> ChannelsData {
        if target == self.source.model() {
            return self.source.clone();
        }
        self.conversions
            .get_or_insert_with(target, || ChannelsData::from_conversion_model(target, &self.model))
    }

    channels_accessor!(rgb, Rgb, RgbChannels, convert_conversion_model_to_rgb_channels_data);
    channels_accessor!(hsl, Hsl, HslChannels, convert_conversion_model_to_hsl_channels_data);
    channels_accessor!(hsv, Hsv, HsvChannels, convert_conversion_model_to_hsv_channels_data);
    channels_accessor!(hwb, Hwb, HwbChannels, convert_conversion_model_to_hwb_channels_data);
    channels_accessor!(
        /// CMYK has no alpha channel; see [`Color::alpha`].
        cmyk,
        Cmyk,
        CmykChannels,
        convert_conversion_model_to_cmyk_channels_data
    );
    channels_accessor!(
        oklch,
        Oklch,
        OklchChannels,
        convert_conversion_model_to_oklch_channels_data
    );
    channels_accessor!(
        /// The six-digit hex form; alpha is available from [`Color::alpha`].
        hex,
        Hex,
        HexChannels,
        convert_conversion_model_to_hex_channels_data
    );
    channels_accessor!(
        /// The exact keyword, or the nearest one when the color has no name.
        named,
        CssNamedColor,
        NamedColorChannels,
        convert_conversion_model_to_named_color_channels_data
    );

    /// CSS text in the source format.
    ///
    /// Hex sources with alpha are written as `#rrggbbaa`.
    pub fn to_css(&self) -> String {
        match &self.source {
            ChannelsData::Hex(hex) if self.alpha() < 1.0 => {
                let alpha = (self.alpha() * 255.0).round() as u8;
                format!("{hex}{alpha:02x}")
            }
            source => source.to_string(),
        }
    }

    /// Forget every memoized conversion.
    pub fn clear_cache(&self) {
        self.conversions.clear();
    }

    /// Number of memoized conversions.
    pub fn cached_conversions(&self) -> usize {
        self.conversions.len()
    }
}

impl Clone for Color {
    fn clone(&self) -> Self {
        Self::with_model(self.source.clone(), self.model.clone())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.model == other.model
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("source", &self.source)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ChannelsData> for Color {
    fn from(source: ChannelsData) -> Self {
        Self::from_channels(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_model_is_returned_untouched() {
        let color = Color::parse("rgb(10.5 20 30)").unwrap();
        assert_eq!(color.rgb().red(), 10.5);
        assert_eq!(color.cached_conversions(), 0);
    }

    #[test]
    fn test_conversions_are_memoized() {
        let color = Color::parse("hsl(120 100% 25%)").unwrap();
        let first = color.rgb();
        assert_eq!(color.cached_conversions(), 1);
        assert_eq!(color.rgb(), first);
        assert_eq!(color.cached_conversions(), 1);

        color.hex();
        assert_eq!(color.cached_conversions(), 2);
        color.clear_cache();
        assert_eq!(color.cached_conversions(), 0);
        assert_eq!(color.rgb(), first);
    }

    #[test]
    fn test_clone_starts_with_an_empty_cache() {
        let color = Color::parse("red").unwrap();
        color.oklch();
        let copy = color.clone();
        assert_eq!(copy, color);
        assert_eq!(copy.cached_conversions(), 0);
    }

    #[test]
    fn test_hex_alpha_survives() {
        let color = Color::parse("#FF000080").unwrap();
        assert_eq!(color.format(), ColorModel::Hex);
        assert_eq!(color.alpha(), 0.502);
        assert_eq!(color.hex().hex(), "#ff0000");
        assert_eq!(color.rgb().alpha(), 0.502);
        assert_eq!(color.to_css(), "#ff000080");
    }

    #[test]
    fn test_display_uses_source_format() {
        let legacy = Color::parse("HSLA(0, 100%, 50%, 0.5)").unwrap();
        assert_eq!(legacy.to_string(), "hsl(0 100% 50% / 0.5)");
        assert_eq!(Color::parse("#ABC").unwrap().to_string(), "#aabbcc");
        assert_eq!(Color::parse("Navy").unwrap().to_string(), "navy");
    }
}
