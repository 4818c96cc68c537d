//! Error types for channel validation, definition parsing and conversion.

use serde_json::Value;

use crate::channels::ColorModel;

/// Path used for errors about the validated value itself rather than a field.
pub const ROOT_PATH: &str = "$";

/// A value rejected at the validation boundary.
///
/// Carries the dot-notation path of the offending value, a rendering of what
/// was received and the constraint it failed, so callers can build a precise
/// message without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value at `{path}`: expected {expected}, received {received}")]
pub struct ValidationError {
    /// Dot-notation path, `$` for the root.
    pub path: String,
    /// The offending value, rendered as JSON.
    pub received: String,
    /// The constraint the value did not meet.
    pub expected: String,
}

impl ValidationError {
    pub fn new(
        path: impl Into<String>,
        received: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            received: received.into(),
            expected: expected.into(),
        }
    }

    /// An error for a JSON value that failed a constraint.
    pub fn for_value(
        path: impl Into<String>,
        received: &Value,
        expected: impl Into<String>,
    ) -> Self {
        Self::new(path, received.to_string(), expected)
    }

    /// An error for a required field that is absent.
    pub fn missing(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(path, "nothing", expected)
    }

    /// Re-root this error beneath `parent`, e.g. `red` becomes `channels.red`.
    #[must_use]
    pub fn nested(mut self, parent: &str) -> Self {
        self.path = if self.path == ROOT_PATH {
            parent.to_string()
        } else {
            format!("{parent}.{}", self.path)
        };
        self
    }
}

/// Errors raised while turning a definition into channel data or converting it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The definition cannot be read as the target model's grammar at all.
    #[error("cannot interpret `{definition}` as {target}")]
    UnsupportedConversion {
        definition: String,
        target: ColorModel,
    },

    /// The surface syntax was recognized but a parameter is malformed.
    #[error("unsupported {model} definition `{definition}`: {reason}")]
    UnsupportedDefinition {
        definition: String,
        model: ColorModel,
        reason: String,
    },

    /// No supported grammar matches the definition.
    #[error("unrecognized color definition `{0}`")]
    Unrecognized(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ColorError {
    pub fn unsupported_conversion(definition: &str, target: ColorModel) -> Self {
        Self::UnsupportedConversion {
            definition: definition.to_string(),
            target,
        }
    }

    pub fn unsupported_definition(
        definition: &str,
        model: ColorModel,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedDefinition {
            definition: definition.to_string(),
            model,
            reason: reason.into(),
        }
    }
}
