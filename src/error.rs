//! Error types for parameter validation and scene configuration.

use crate::types::ParameterField;
use thiserror::Error;

/// Reasons a parameter field cannot feed the physics engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// The field text is not a number at all.
    #[error("{field} is not a number: {input:?}")]
    NotANumber {
        /// Field that failed to parse
        field: ParameterField,
        /// Raw text the user entered
        input: String,
    },
    /// The field parsed to an infinite or NaN value.
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// Offending field
        field: ParameterField,
        /// Parsed value
        value: f64,
    },
    /// The field parsed to zero or a negative value.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive {
        /// Offending field
        field: ParameterField,
        /// Parsed value
        value: f64,
    },
}

impl ParameterError {
    /// The field this error refers to.
    pub fn field(&self) -> ParameterField {
        match self {
            ParameterError::NotANumber { field, .. }
            | ParameterError::NotFinite { field, .. }
            | ParameterError::NonPositive { field, .. } => *field,
        }
    }
}

/// Failure to load a [`crate::SceneConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document was malformed or had the wrong shape.
    #[error("invalid scene configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A string geometry ratio was outside `[0, 1]`.
    #[error("string {index}: ratio {name} = {value} is outside [0, 1]")]
    RatioOutOfRange {
        /// Position of the string in the configuration
        index: usize,
        /// Name of the offending ratio
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// The configuration listed no strings to draw.
    #[error("scene configuration must contain at least one string")]
    NoStrings,
}
