//! Error types for ipc-landgen.
//!
//! Two families of errors exist:
//!
//! - [`ConfigError`] for reading and validating input and settings files
//! - [`GenerateError`] for failures while building or writing a pattern
//!
//! A missing optional dimension is never an error; see
//! [`crate::housing::DimensionInput`] for the fallback chain.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for pattern generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Input or settings file could not be read.
    #[error("failed to read file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Input or settings file could not be parsed.
    #[error("failed to parse file: {path}")]
    ParseError {
        /// Path to the file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// File not found.
    #[error("file not found: {path}")]
    NotFound {
        /// Path where the file was expected.
        path: PathBuf,
    },

    /// Settings validation failed.
    #[error("settings validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while generating a land pattern.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested package family kind is not known.
    #[error("Unsupported kind: {kind}")]
    UnsupportedFamily {
        /// The offending kind string.
        kind: String,
    },

    /// The lead count does not fit the package topology.
    #[error("Wrong lead count ({count}) for {family}; expected {expected}")]
    InvalidLeadCount {
        /// Package family name.
        family: &'static str,
        /// Lead count found in the housing.
        count: u32,
        /// Human readable list of accepted counts.
        expected: &'static str,
    },

    /// A dimension violates `min <= nom <= max`.
    #[error("Invalid dimension '{field}': {message}")]
    InvalidDimension {
        /// Housing field name.
        field: String,
        /// Description of what's wrong.
        message: String,
    },

    /// Settings or input could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to write the output file.
    #[error("Failed to write file: {path}")]
    FileWrite {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Creates an unsupported family error.
    pub fn unsupported_family(kind: impl Into<String>) -> Self {
        Self::UnsupportedFamily { kind: kind.into() }
    }

    /// Creates an invalid lead count error.
    #[must_use]
    pub const fn invalid_lead_count(family: &'static str, count: u32, expected: &'static str) -> Self {
        Self::InvalidLeadCount {
            family,
            count,
            expected,
        }
    }

    /// Creates an invalid dimension error.
    pub fn invalid_dimension(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDimension {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/element.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("element.json"));
    }

    #[test]
    fn validation_error_display() {
        let error = ConfigError::ValidationError {
            message: "invalid setting".to_string(),
        };
        assert!(error.to_string().contains("invalid setting"));
    }

    #[test]
    fn unsupported_family_carries_kind() {
        let err = GenerateError::unsupported_family("tsop");
        assert_eq!(err.to_string(), "Unsupported kind: tsop");
    }

    #[test]
    fn lead_count_error_display() {
        let err = GenerateError::invalid_lead_count("SOT23", 4, "3, 5 or 6");
        assert_eq!(err.to_string(), "Wrong lead count (4) for SOT23; expected 3, 5 or 6");
    }
}
