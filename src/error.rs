//! Error types for qfilter.

use thiserror::Error;

/// The main error type for filter building.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A top-level filter field has the wrong shape.
    #[error("invalid filter: '{field}'")]
    InvalidFilter { field: &'static str },

    /// A comparison keyword was used where a property name belongs.
    #[error("reserved keyword: '{0}' cannot be used as a property name")]
    ReservedKeyword(String),

    /// Unrecognized operator inside a property condition.
    #[error("invalid keyword: '{0}'")]
    InvalidKeyword(String),

    /// Expected an object with exactly one key.
    #[error("not an object")]
    NotAnObject,

    /// Expected an array.
    #[error("not an array: '{key}'")]
    NotAnArray { key: String },

    /// Array is empty, or holds no usable element.
    #[error("empty array: '{key}'")]
    EmptyArray { key: String },

    /// The value's JSON type is not accepted here.
    #[error("not a supported type: '{key}'")]
    NotSupportedType { key: String },

    /// Should be unreachable.
    #[error("unknown error")]
    Unknown,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FilterError {
    pub fn invalid_filter(field: &'static str) -> Self {
        Self::InvalidFilter { field }
    }

    pub fn not_an_array(key: impl Into<String>) -> Self {
        Self::NotAnArray { key: key.into() }
    }

    pub fn empty_array(key: impl Into<String>) -> Self {
        Self::EmptyArray { key: key.into() }
    }

    pub fn not_supported(key: impl Into<String>) -> Self {
        Self::NotSupportedType { key: key.into() }
    }
}

/// Result type alias for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
