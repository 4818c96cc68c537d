//! CSS color definitions.
//!
//! Each `parse_*` function reads one grammar and fails at one of three levels:
//!
//! - [`ColorError::UnsupportedConversion`]: the text is not that grammar at all
//!   (wrong prefix or function name).
//! - [`ColorError::UnsupportedDefinition`]: the grammar is recognized but its
//!   arguments are malformed (wrong count, a non-numeric token, mixed
//!   separators, a unit where none is allowed).
//! - [`ColorError::Validation`]: every token parsed but a value is out of range.
//!
//! [`parse`] picks the grammar from the definition's shape and reports
//! [`ColorError::Unrecognized`] when none applies.
//!
//! # Grammar
//!
//! Matching is case-insensitive and surrounding whitespace is ignored.
//! Functions accept the legacy comma syntax `rgb(255, 0, 0, 0.5)` or the
//! space syntax `rgb(255 0 0 / 50%)`, never a mix of the two.
//!
//! | Function              | Channels                               | Alpha |
//! |-----------------------|----------------------------------------|-------|
//! | `rgb`, `rgba`         | 0–255 or `%` of 255                    | yes   |
//! | `hsl`, `hsla`         | hue (`deg` optional), `%`, `%`         | yes   |
//! | `hsv`, `hsva`         | hue (`deg` optional), `%`, `%`         | yes   |
//! | `hwb`                 | hue (`deg` optional), `%`, `%`         | yes   |
//! | `cmyk`, `device-cmyk` | `%`, or 0–1 fractions                  | no    |
//! | `oklch`               | L (0–1 or `%`), C (0–0.4 or `%`), hue  | yes   |

use once_cell::sync::Lazy;
use regex::Regex;
use tinct_core::channels::oklch::CHROMA_MAX;
use tinct_core::channels::rgb::RGB_MAX;
use tinct_core::model::OPAQUE;
use tinct_core::round::normalize_alpha;
use tinct_core::{
    ChannelsData, CmykChannels, ColorError, ColorModel, HexChannels, HslChannels, HsvChannels,
    HwbChannels, NamedColorChannels, OklchChannels, RgbChannels,
};

static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z][a-z-]*)\(\s*(.*?)\s*\)$").expect("function pattern is a valid regex")
});

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?)(%|deg)?$")
        .expect("number pattern is a valid regex")
});

/// A parsed definition: its channel data plus the effective alpha.
///
/// Alpha is usually the channels' own, but `#rrggbbaa` carries alpha that hex
/// channel data has no room for.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub channels: ChannelsData,
    pub alpha: f64,
}

impl Definition {
    fn from_channels(channels: ChannelsData) -> Self {
        let alpha = channels.alpha();
        Self { channels, alpha }
    }
}

/// Parse any supported CSS color definition.
pub fn parse(definition: &str) -> Result<Definition, ColorError> {
    let trimmed = definition.trim();
    if trimmed.starts_with('#') {
        let (hex, alpha) = parse_hex(definition)?;
        return Ok(Definition {
            channels: ChannelsData::Hex(hex),
            alpha,
        });
    }

    let lowered = trimmed.to_ascii_lowercase();
    if let Some(captures) = FUNCTION.captures(&lowered) {
        let channels = match &captures[1] {
            "rgb" | "rgba" => ChannelsData::Rgb(parse_rgb(definition)?),
            "hsl" | "hsla" => ChannelsData::Hsl(parse_hsl(definition)?),
            "hsv" | "hsva" => ChannelsData::Hsv(parse_hsv(definition)?),
            "hwb" => ChannelsData::Hwb(parse_hwb(definition)?),
            "cmyk" | "device-cmyk" => ChannelsData::Cmyk(parse_cmyk(definition)?),
            "oklch" => ChannelsData::Oklch(parse_oklch(definition)?),
            name => {
                tracing::debug!("unknown color function `{name}` in `{definition}`");
                return Err(ColorError::Unrecognized(definition.to_string()));
            }
        };
        return Ok(Definition::from_channels(channels));
    }

    parse_named(definition)
        .map(|named| Definition::from_channels(ChannelsData::CssNamedColor(named)))
        .map_err(|_| {
            tracing::debug!("`{definition}` matches no color grammar");
            ColorError::Unrecognized(definition.to_string())
        })
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` into canonical hex channels
/// and the alpha encoded in the trailing digits (1 when absent).
pub fn parse_hex(definition: &str) -> Result<(HexChannels, f64), ColorError> {
    let digits = definition
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ColorError::unsupported_conversion(definition, ColorModel::Hex))?;
    let malformed =
        |reason: String| ColorError::unsupported_definition(definition, ColorModel::Hex, reason);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(malformed(format!("`{bad}` is not a hex digit")));
    }
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        n => return Err(malformed(format!("expected 3, 4, 6 or 8 digits, found {n}"))),
    };

    let (rgb, alpha) = expanded.split_at(6);
    let alpha = if alpha.is_empty() {
        OPAQUE
    } else {
        let byte = u8::from_str_radix(alpha, 16).map_err(|err| malformed(err.to_string()))?;
        normalize_alpha(f64::from(byte) / RGB_MAX)
    };
    Ok((HexChannels::new(&format!("#{rgb}"))?, alpha))
}

pub fn parse_rgb(definition: &str) -> Result<RgbChannels, ColorError> {
    let call = Call::open(definition, ColorModel::Rgb, &["rgb", "rgba"], 3, true)?;
    let [red, green, blue] = call.read_channels(|token| call.scaled(token, 1.0, RGB_MAX))?;
    Ok(RgbChannels::new(red, green, blue, call.alpha()?)?)
}

pub fn parse_hsl(definition: &str) -> Result<HslChannels, ColorError> {
    let call = Call::open(definition, ColorModel::Hsl, &["hsl", "hsla"], 3, true)?;
    let [hue, saturation, lightness] = call.hue_and_percentages()?;
    Ok(HslChannels::new(hue, saturation, lightness, call.alpha()?)?)
}

pub fn parse_hsv(definition: &str) -> Result<HsvChannels, ColorError> {
    let call = Call::open(definition, ColorModel::Hsv, &["hsv", "hsva"], 3, true)?;
    let [hue, saturation, value] = call.hue_and_percentages()?;
    Ok(HsvChannels::new(hue, saturation, value, call.alpha()?)?)
}

pub fn parse_hwb(definition: &str) -> Result<HwbChannels, ColorError> {
    let call = Call::open(definition, ColorModel::Hwb, &["hwb"], 3, true)?;
    let [hue, whiteness, blackness] = call.hue_and_percentages()?;
    Ok(HwbChannels::new(hue, whiteness, blackness, call.alpha()?)?)
}

/// Percentages, or bare numbers read as 0–1 fractions of full ink.
pub fn parse_cmyk(definition: &str) -> Result<CmykChannels, ColorError> {
    let call = Call::open(definition, ColorModel::Cmyk, &["cmyk", "device-cmyk"], 4, false)?;
    let [cyan, magenta, yellow, key] =
        call.read_channels(|token| call.scaled(token, 100.0, 100.0))?;
    Ok(CmykChannels::new(cyan, magenta, yellow, key)?)
}

pub fn parse_oklch(definition: &str) -> Result<OklchChannels, ColorError> {
    let call = Call::open(definition, ColorModel::Oklch, &["oklch"], 3, true)?;
    let lightness = call.scaled(&call.channels[0], 1.0, 1.0)?;
    let chroma = call.scaled(&call.channels[1], 1.0, CHROMA_MAX)?;
    let hue = call.hue(&call.channels[2])?;
    Ok(OklchChannels::new(lightness, chroma, hue, call.alpha()?)?)
}

pub fn parse_named(definition: &str) -> Result<NamedColorChannels, ColorError> {
    NamedColorChannels::new(definition.trim())
        .map_err(|_| ColorError::unsupported_conversion(definition, ColorModel::CssNamedColor))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit {
    Bare,
    Percent,
    Degrees,
}

/// One function call, split into channel tokens and an optional alpha token.
struct Call<'a> {
    definition: &'a str,
    model: ColorModel,
    channels: Vec<String>,
    alpha: Option<String>,
}

impl<'a> Call<'a> {
    fn open(
        definition: &'a str,
        model: ColorModel,
        names: &[&str],
        count: usize,
        takes_alpha: bool,
    ) -> Result<Self, ColorError> {
        let lowered = definition.trim().to_ascii_lowercase();
        let captures = FUNCTION
            .captures(&lowered)
            .filter(|captures| names.iter().any(|name| *name == &captures[1]))
            .ok_or_else(|| ColorError::unsupported_conversion(definition, model))?;

        let mut call = Self {
            definition,
            model,
            channels: Vec::new(),
            alpha: None,
        };
        let (channels, alpha) =
            split_arguments(&captures[2], count).map_err(|reason| call.malformed(reason))?;
        if channels.len() != count {
            let found = channels.len();
            return Err(call.malformed(format!("expected {count} channels, found {found}")));
        }
        if alpha.is_some() && !takes_alpha {
            return Err(call.malformed("alpha is not supported"));
        }
        call.channels = channels;
        call.alpha = alpha;
        Ok(call)
    }

    fn malformed(&self, reason: impl Into<String>) -> ColorError {
        ColorError::unsupported_definition(self.definition, self.model, reason)
    }

    fn number(&self, token: &str) -> Result<(f64, Unit), ColorError> {
        let not_a_number = || self.malformed(format!("`{token}` is not a number"));
        let captures = NUMBER.captures(token).ok_or_else(not_a_number)?;
        let value: f64 = captures[1].parse().map_err(|_| not_a_number())?;
        let unit = match captures.get(2).map(|unit| unit.as_str()) {
            Some("%") => Unit::Percent,
            Some(_) => Unit::Degrees,
            None => Unit::Bare,
        };
        Ok((value, unit))
    }

    /// A bare number times `bare_scale`, or a percentage of `full_scale`.
    fn scaled(&self, token: &str, bare_scale: f64, full_scale: f64) -> Result<f64, ColorError> {
        match self.number(token)? {
            (value, Unit::Bare) => Ok(value * bare_scale),
            (value, Unit::Percent) => Ok(value * full_scale / 100.0),
            (_, Unit::Degrees) => Err(self.malformed(format!("`{token}` cannot be an angle"))),
        }
    }

    fn hue(&self, token: &str) -> Result<f64, ColorError> {
        match self.number(token)? {
            (_, Unit::Percent) => {
                Err(self.malformed(format!("hue `{token}` cannot be a percentage")))
            }
            (value, _) => Ok(value),
        }
    }

    fn read_channels<const N: usize>(
        &self,
        read: impl Fn(&str) -> Result<f64, ColorError>,
    ) -> Result<[f64; N], ColorError> {
        let mut values = [0.0; N];
        for (value, token) in values.iter_mut().zip(&self.channels) {
            *value = read(token.as_str())?;
        }
        Ok(values)
    }

    /// `hue saturation lightness` style: a hue then two percentages.
    fn hue_and_percentages(&self) -> Result<[f64; 3], ColorError> {
        Ok([
            self.hue(&self.channels[0])?,
            self.scaled(&self.channels[1], 1.0, 100.0)?,
            self.scaled(&self.channels[2], 1.0, 100.0)?,
        ])
    }

    fn alpha(&self) -> Result<f64, ColorError> {
        match &self.alpha {
            Some(token) => self.scaled(token, 1.0, 1.0),
            None => Ok(OPAQUE),
        }
    }
}

/// Split a function body into channel tokens and an optional alpha token.
///
/// Comma syntax takes alpha as the extra trailing argument; space syntax takes
/// it after a single `/`.
fn split_arguments(body: &str, count: usize) -> Result<(Vec<String>, Option<String>), String> {
    if body.contains(',') {
        if body.contains('/') {
            return Err("mixed comma and slash separators".to_string());
        }
        let mut parts: Vec<String> = body.split(',').map(|part| part.trim().to_string()).collect();
        if parts.iter().any(String::is_empty) {
            return Err("empty argument".to_string());
        }
        if parts.iter().any(|part| part.contains(char::is_whitespace)) {
            return Err("mixed comma and space separators".to_string());
        }
        let alpha = if parts.len() == count + 1 { parts.pop() } else { None };
        return Ok((parts, alpha));
    }

    let (channels, alpha) = match body.split_once('/') {
        Some((channels, alpha)) => {
            let alpha = alpha.trim();
            if alpha.is_empty() || alpha.contains(|c: char| c == '/' || c.is_whitespace()) {
                return Err("alpha must be a single value after `/`".to_string());
            }
            (channels, Some(alpha.to_string()))
        }
        None => (body, None),
    };
    let channels = channels.split_whitespace().map(str::to_string).collect();
    Ok((channels, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_hex_forms() {
        let (hex, alpha) = parse_hex("#F00").unwrap();
        assert_eq!((hex.hex(), alpha), ("#ff0000", 1.0));

        let (hex, alpha) = parse_hex("  #ff000080 ").unwrap();
        assert_eq!(hex.hex(), "#ff0000");
        assert_eq!(alpha, 0.502);

        let (hex, alpha) = parse_hex("#0f08").unwrap();
        assert_eq!(hex.hex(), "#00ff00");
        assert_eq!(alpha, 0.533);
    }

    #[test]
    fn test_hex_error_levels() {
        assert!(matches!(parse_hex("ff0000"), Err(ColorError::UnsupportedConversion { .. })));
        assert!(matches!(parse_hex("#ff00"), Ok(_)));
        assert!(matches!(parse_hex("#ff000"), Err(ColorError::UnsupportedDefinition { .. })));
        assert!(matches!(parse_hex("#gg0000"), Err(ColorError::UnsupportedDefinition { .. })));
    }

    #[test]
    fn test_rgb_syntaxes_agree() {
        let expected = RgbChannels::new(255.0, 128.0, 0.0, 0.5).unwrap();
        assert_eq!(parse_rgb("rgb(255 128 0 / 0.5)").unwrap(), expected);
        assert_eq!(parse_rgb("rgba(255, 128, 0, 0.5)").unwrap(), expected);
        assert_eq!(parse_rgb("RGB(255 128 0 / 50%)").unwrap(), expected);
        assert_eq!(parse_rgb("rgb(255,128,0)").unwrap().alpha(), 1.0);
    }

    #[test]
    fn test_rgb_percentages_scale_to_255() {
        let rgb = parse_rgb("rgb(100% 50% 0%)").unwrap();
        assert_eq!(rgb.red(), 255.0);
        assert!((rgb.green() - 127.5).abs() < EPSILON);
        assert_eq!(rgb.blue(), 0.0);
    }

    #[test]
    fn test_rgb_error_levels() {
        assert!(matches!(parse_rgb("hsl(0 0% 0%)"), Err(ColorError::UnsupportedConversion { .. })));
        assert!(matches!(parse_rgb("red"), Err(ColorError::UnsupportedConversion { .. })));
        assert!(matches!(parse_rgb("rgb(1 2)"), Err(ColorError::UnsupportedDefinition { .. })));
        assert!(matches!(parse_rgb("rgb(1, 2 3)"), Err(ColorError::UnsupportedDefinition { .. })));
        assert!(matches!(parse_rgb("rgb(1 2 x)"), Err(ColorError::UnsupportedDefinition { .. })));
        assert!(matches!(
            parse_rgb("rgb(1 2 3 / )"),
            Err(ColorError::UnsupportedDefinition { .. })
        ));
        assert!(matches!(
            parse_rgb("rgb(1, 2, 3 / 1)"),
            Err(ColorError::UnsupportedDefinition { .. })
        ));

        match parse_rgb("rgb(256 0 0)") {
            Err(ColorError::Validation(err)) => assert_eq!(err.path, "red"),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_hue_functions() {
        let hsl = parse_hsl("hsl(120deg 100% 25% / 0.75)").unwrap();
        assert_eq!(hsl, HslChannels::new(120.0, 100.0, 25.0, 0.75).unwrap());
        assert_eq!(parse_hsl("hsla(120, 100%, 25%, 0.75)").unwrap(), hsl);

        let hsv = parse_hsv("hsv(200 50% 80%)").unwrap();
        assert_eq!(hsv, HsvChannels::new(200.0, 50.0, 80.0, 1.0).unwrap());

        let hwb = parse_hwb("hwb(30 10% 20%)").unwrap();
        assert_eq!(hwb, HwbChannels::new(30.0, 10.0, 20.0, 1.0).unwrap());

        assert!(matches!(

            parse_hsl("hsl(50% 10% 10%)"),

            Err(ColorError::UnsupportedDefinition { .. })

        ));
        assert!(matches!(
            parse_hsl("hsl(0 10deg 10%)"),
            Err(ColorError::UnsupportedDefinition { .. })
        ));
        assert!(matches!(parse_hsl("hsl(400 10% 10%)"), Err(ColorError::Validation(_))));
    }

    #[test]
    fn test_cmyk_percentages_and_fractions() {
        let expected = CmykChannels::new(0.0, 100.0, 100.0, 0.0).unwrap();
        assert_eq!(parse_cmyk("device-cmyk(0% 100% 100% 0%)").unwrap(), expected);
        assert_eq!(parse_cmyk("cmyk(0, 1, 1, 0)").unwrap(), expected);
        assert!(matches!(
            parse_cmyk("cmyk(0 1 1 0 / 0.5)"),
            Err(ColorError::UnsupportedDefinition { .. })
        ));
        assert!(matches!(parse_cmyk("cmyk(0 1 1)"), Err(ColorError::UnsupportedDefinition { .. })));
    }

    #[test]
    fn test_oklch_lightness_forms() {
        let oklch = parse_oklch("oklch(62.8% 0.258 29.234)").unwrap();
        assert!((oklch.lightness() - 0.628).abs() < EPSILON);
        assert_eq!(oklch.chroma(), 0.258);
        assert_eq!(oklch.hue(), 29.234);

        let oklch = parse_oklch("oklch(0.5 100% 90 / 0.25)").unwrap();
        assert!((oklch.chroma() - CHROMA_MAX).abs() < EPSILON);
        assert_eq!(oklch.alpha(), 0.25);
    }

    #[test]
    fn test_named() {
        assert_eq!(parse_named(" RebeccaPurple ").unwrap().keyword(), "rebeccapurple");
        assert!(matches!(parse_named("blurple"), Err(ColorError::UnsupportedConversion { .. })));
    }

    #[test]
    fn test_parse_detects_format() {
        assert_eq!(parse("#abc").unwrap().channels.model(), ColorModel::Hex);
        assert_eq!(parse("rgb(0 0 0)").unwrap().channels.model(), ColorModel::Rgb);
        assert_eq!(parse("hsla(0, 0%, 0%, 1)").unwrap().channels.model(), ColorModel::Hsl);
        assert_eq!(parse("device-cmyk(0 0 0 1)").unwrap().channels.model(), ColorModel::Cmyk);
        assert_eq!(parse("teal").unwrap().channels.model(), ColorModel::CssNamedColor);

        let definition = parse("#00000000").unwrap();
        assert_eq!(definition.alpha, 0.0);
    }

    #[test]
    fn test_parse_unrecognized() {
        for definition in ["lab(50 20 30)", "not-a-color", ""] {
            assert_eq!(
                parse(definition).unwrap_err(),
                ColorError::Unrecognized(definition.to_string())
            );
        }
        // A known grammar with bad arguments keeps its precise error.
        assert!(matches!(parse("rgb(1 2)"), Err(ColorError::UnsupportedDefinition { .. })));
    }
}
