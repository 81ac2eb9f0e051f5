//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Why a single measurement field was rejected.
///
/// Input errors are never fatal: they are surfaced as field feedback and
/// reported upward only as an invalid result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Text does not match the numeric-literal grammar
    #[error("'{text}' is not a valid measurement")]
    Syntax { text: String },

    /// Parsed value lies outside the accepted range
    #[error("{value} is outside the accepted range [{min}, {max}]")]
    Range { value: f64, min: f64, max: f64 },

    /// Value is zero or negative after unit conversion
    #[error("{value} is not a positive measurement")]
    NonPositive { value: f64 },
}

impl InputError {
    /// Short machine-readable tag, used in logs and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "syntax",
            Self::Range { .. } => "range",
            Self::NonPositive { .. } => "non_positive",
        }
    }
}

/// A submission that could not be evaluated.
///
/// Carries the per-field failures so the caller can show one combined banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("submission rejected (primary: {}, secondary: {})", describe(.primary), describe(.secondary))]
    Rejected {
        primary: Option<InputError>,
        secondary: Option<InputError>,
    },
}

fn describe(error: &Option<InputError>) -> String {
    match error {
        Some(err) => err.to_string(),
        None => "ok".to_string(),
    }
}

/// Main error type for bmiscale operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error(transparent)]
    TomlWrite(#[from] toml::ser::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
