//! Configuration error types.

use derive_more::{Display, Error};

/// Configuration error with source location.
///
/// Raised when a client is constructed without a required credential, or
/// when an endpoint URL cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is missing or malformed
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use switchyard_error::ConfigError;
    ///
    /// let err = ConfigError::new("LASTFM_API_KEY is required");
    /// assert!(err.message.contains("LASTFM_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
