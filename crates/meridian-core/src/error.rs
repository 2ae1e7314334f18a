//! Error types for the meridian library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all meridian operations.
#[derive(Error, Debug)]
pub enum MeridianError {
    /// Transport failure or non-success HTTP status, message kept verbatim
    #[error("{message}")]
    Network { message: String },
    /// Success status but the body was missing, null or undecodable
    #[error("Empty or invalid response: {reason}")]
    EmptyOrInvalidResponse { reason: String },
    /// Invalid input validation errors
    #[error("Invalid argument for '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },
    /// The datetime string could not be parsed as an instant
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
    /// The zone name is not in the timezone database
    #[error("Unknown time zone '{name}'")]
    UnknownTimeZone { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating argument validation errors.
pub struct InvalidArgumentBuilder {
    field: String,
}

impl InvalidArgumentBuilder {
    /// Create a new invalid argument error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> MeridianError {
        MeridianError::InvalidArgument {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl MeridianError {
    /// Creates a builder for argument validation errors.
    pub fn invalid_argument(field: impl Into<String>) -> InvalidArgumentBuilder {
        InvalidArgumentBuilder::new(field)
    }

    /// Creates an empty-or-invalid response error.
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::EmptyOrInvalidResponse {
            reason: reason.into(),
        }
    }

    /// The message a failed fetch records in the store.
    ///
    /// Network errors carry the transport text unchanged, everything else
    /// uses the Display form.
    pub fn fetch_message(&self) -> String {
        match self {
            Self::Network { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for MeridianError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::invalid_response(err.to_string())
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to MeridianError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| MeridianError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for meridian operations
pub type Result<T> = std::result::Result<T, MeridianError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_builder() {
        let err = MeridianError::invalid_argument("zone").with_reason("must not be empty");
        assert_eq!(err.to_string(), "Invalid argument for 'zone': must not be empty");
    }

    #[test]
    fn test_network_message_is_verbatim() {
        let err = MeridianError::Network {
            message: "Network Error".to_string(),
        };
        assert_eq!(err.fetch_message(), "Network Error");
        assert_eq!(err.to_string(), "Network Error");
    }

    #[test]
    fn test_fetch_message_for_invalid_response() {
        let err = MeridianError::invalid_response("body was null");
        assert_eq!(
            err.fetch_message(),
            "Empty or invalid response: body was null"
        );
    }

    #[test]
    fn test_with_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.with_context("reading settings").unwrap_err();
        assert!(matches!(err, MeridianError::Configuration { .. }));
        assert_eq!(err.to_string(), "Configuration error: reading settings: boom");
    }
}
