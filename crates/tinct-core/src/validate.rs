//! Schema-driven channel validation.
//!
//! Each numeric model declares its channels as a fixed array of
//! [`ChannelRange`]s. The same schema backs three entry points: validating an
//! untyped JSON value, reading a validated value into a typed record, and
//! checking the arguments of a typed constructor.

use serde_json::{Map, Value};

use crate::error::{ROOT_PATH, ValidationError};
use crate::model::OPAQUE;

/// Name and closed range of one numeric channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    /// Value used when an optional channel is absent. `None` means required.
    pub default: Option<f64>,
}

impl ChannelRange {
    pub const fn required(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            min,
            max,
            default: None,
        }
    }

    pub const fn optional(name: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            name,
            min,
            max,
            default: Some(default),
        }
    }

    /// Human-readable constraint used in error messages.
    pub fn describe(&self) -> String {
        format!("a number in [{}, {}]", self.min, self.max)
    }

    /// Accepts finite values in `[min, max]`, boundaries included.
    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(ValidationError::new(
                self.name,
                value.to_string(),
                self.describe(),
            ))
        }
    }
}

/// The optional alpha channel shared by most models.
pub const ALPHA: ChannelRange = ChannelRange::optional("alpha", 0.0, 1.0, OPAQUE);

/// Hue in degrees; 0 and 360 are both accepted.
pub const fn hue() -> ChannelRange {
    ChannelRange::required("hue", 0.0, 360.0)
}

/// A percentage channel in `[0, 100]`.
pub const fn percentage(name: &'static str) -> ChannelRange {
    ChannelRange::required(name, 0.0, 100.0)
}

/// Require `input` to be a JSON object.
pub fn expect_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input
        .as_object()
        .ok_or_else(|| ValidationError::for_value(ROOT_PATH, input, "an object"))
}

/// Require a string-valued field.
pub fn expect_string<'a>(
    object: &'a Map<String, Value>,
    name: &str,
) -> Result<&'a str, ValidationError> {
    match object.get(name) {
        None => Err(ValidationError::missing(name, "a string")),
        Some(value) => value
            .as_str()
            .ok_or_else(|| ValidationError::for_value(name, value, "a string")),
    }
}

/// Validate every channel of `schema` in `input`, returning `input` itself.
pub fn validate_numeric_channels<'a>(
    input: &'a Value,
    schema: &[ChannelRange],
) -> Result<&'a Value, ValidationError> {
    let object = expect_object(input)?;
    for range in schema {
        match object.get(range.name) {
            None if range.default.is_some() => {}
            None => return Err(ValidationError::missing(range.name, range.describe())),
            Some(value) => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| ValidationError::for_value(range.name, value, "a number"))?;
                range.check(number)?;
            }
        }
    }
    Ok(input)
}

/// Validate and read `input` into channel values ordered like `schema`.
pub fn read_numeric_channels<const N: usize>(
    input: &Value,
    schema: &[ChannelRange; N],
) -> Result<[f64; N], ValidationError> {
    let object = expect_object(validate_numeric_channels(input, schema)?)?;
    let mut values = [0.0; N];
    for (slot, range) in values.iter_mut().zip(schema.iter()) {
        *slot = object
            .get(range.name)
            .and_then(Value::as_f64)
            .or(range.default)
            .unwrap_or(range.min);
    }
    Ok(values)
}

/// Check typed constructor arguments against `schema`.
pub fn check_numeric_channels<const N: usize>(
    schema: &[ChannelRange; N],
    values: [f64; N],
) -> Result<[f64; N], ValidationError> {
    for (range, value) in schema.iter().zip(values.iter()) {
        range.check(*value)?;
    }
    Ok(values)
}
