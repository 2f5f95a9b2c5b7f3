//! Error types for the Ordway tap metadata crate
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("Stream '{stream}' is not registered")]
    StreamNotFound { stream: String },

    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Malformed schema for stream '{stream}': {message}")]
    MalformedSchema { stream: String, message: String },

    // ============================================================================
    // Catalog Errors
    // ============================================================================
    #[error("Stream '{stream}' is selected but its parent stream '{parent}' is not")]
    DependencyConflict { stream: String, parent: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a stream-not-found error
    pub fn stream_not_found(stream: impl Into<String>) -> Self {
        Self::StreamNotFound {
            stream: stream.into(),
        }
    }

    /// Create a malformed schema error
    pub fn malformed_schema(stream: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedSchema {
            stream: stream.into(),
            message: message.into(),
        }
    }

    /// Create a dependency conflict error
    pub fn dependency_conflict(stream: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::DependencyConflict {
            stream: stream.into(),
            parent: parent.into(),
        }
    }

    /// Check if this error is a failed stream lookup
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Error::StreamNotFound { .. })
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::stream_not_found("invoices");
        assert_eq!(err.to_string(), "Stream 'invoices' is not registered");

        let err = Error::malformed_schema("plans", "missing 'properties'");
        assert_eq!(
            err.to_string(),
            "Malformed schema for stream 'plans': missing 'properties'"
        );

        let err = Error::dependency_conflict("contacts", "customers");
        assert_eq!(
            err.to_string(),
            "Stream 'contacts' is selected but its parent stream 'customers' is not"
        );
    }

    #[test]
    fn test_is_lookup_error() {
        assert!(Error::stream_not_found("x").is_lookup_error());
        assert!(!Error::config("x").is_lookup_error());
        assert!(!Error::malformed_schema("x", "y").is_lookup_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_io_error_with_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = result
            .with_context(|| "Failed to read schema 'x.json'".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to read schema 'x.json': IO error: gone");
    }
}
