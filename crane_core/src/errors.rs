//! # Error Types
//!
//! Structured error types for crane_core. Range violations and advisory
//! thresholds are *not* errors: they are reported as data through
//! [`ValidationResult`](crate::validation::ValidationResult). The variants here
//! cover contract violations at the string boundary (unknown fields, unknown
//! enum values, unknown preset ids) and file/config handling.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::errors::{CalcError, CalcResult};
//!
//! fn require_known(id: &str) -> CalcResult<()> {
//!     if id != "mobile-50t" {
//!         return Err(CalcError::preset_not_found(id));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(require_known("nope").unwrap_err().error_code(), "PRESET_NOT_FOUND");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for crane_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be accepted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The section does not carry a field with this name
    #[error("Unknown field: {section}.{field}")]
    UnknownField { section: String, field: String },

    /// An enum field was given a value outside its declared set
    #[error("Invalid choice for '{field}': '{value}' (allowed: {allowed})")]
    InvalidChoice {
        field: String,
        value: String,
        allowed: String,
    },

    /// No preset with this id exists in the family catalogue
    #[error("Preset not found: {id}")]
    PresetNotFound { id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// A profile override could not be parsed or applied
    #[error("Config error: {reason}")]
    ConfigError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(section: impl Into<String>, field: impl Into<String>) -> Self {
        CalcError::UnknownField {
            section: section.into(),
            field: field.into(),
        }
    }

    /// Create an InvalidChoice error
    pub fn invalid_choice(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        CalcError::InvalidChoice {
            field: field.into(),
            value: value.into(),
            allowed: allowed.into(),
        }
    }

    /// Create a PresetNotFound error
    pub fn preset_not_found(id: impl Into<String>) -> Self {
        CalcError::PresetNotFound { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::InvalidChoice { .. } => "INVALID_CHOICE",
            CalcError::PresetNotFound { .. } => "PRESET_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}
