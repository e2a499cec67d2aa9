//! Error types for schema decoding.

use thiserror::Error;

/// Main error type for all decode and validation operations.
///
/// Every structural error carries the dotted path of the offending field
/// (e.g. `tracks.items[3].artists[0].name`) so the caller can tell exactly
/// where a response diverged from the documented shape.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// A required field is absent from the JSON object.
    #[error("missing required field `{path}`")]
    MissingRequiredField {
        /// Path of the missing field.
        path: String,
    },

    /// A field is present but holds a value of the wrong JSON type.
    #[error("type mismatch at `{path}`: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Path of the mismatched field.
        path: String,
        /// The type the schema declares.
        expected: &'static str,
        /// The JSON type actually found.
        actual: &'static str,
    },

    /// A literal/enum field holds a value outside its closed set.
    #[error("invalid discriminant at `{path}`: `{value}` is not one of {allowed:?}")]
    InvalidDiscriminant {
        /// Path of the discriminant field.
        path: String,
        /// The offending value.
        value: String,
        /// The values the schema allows.
        allowed: &'static [&'static str],
    },

    /// The caller asked for an entity name the registry does not know.
    #[error("unknown entity `{0}`")]
    UnknownEntity(String),

    /// Structural validation passed but serde conversion still failed.
    #[error("conversion error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err.to_string())
    }
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
