//! Error types for fnplot operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fnplot operations.
///
/// Per-sample evaluation failures are not part of this enum: they are
/// recovered inside a render call and reported as [`crate::sample::SampleError`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// A render parameter is out of its valid range. Raised before any drawing.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Invalid dimensions for a surface.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A scene references a function name that is not in the catalog.
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Configuration parse error.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number of the error (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidParameter`].
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_parameter_names_field() {
        let err = Error::invalid("scale", "must be positive, got -1");
        let display = err.to_string();
        assert!(display.contains("`scale`"));
        assert!(display.contains("-1"));
    }

    #[test]
    fn test_config_parse_includes_line() {
        let err = Error::ConfigParse {
            line: 7,
            message: "bad".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }
}
