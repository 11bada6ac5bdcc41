//! Input validation error types.

use derive_more::{Display, Error};

/// Tool argument validation error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Input Error: {} at line {} in {}", message, line, file)]
pub struct InputError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A required argument was absent or empty.
    #[track_caller]
    pub fn missing(name: &str) -> Self {
        Self::new(format!("Missing '{}'", name))
    }

    /// An argument had the wrong JSON type.
    #[track_caller]
    pub fn invalid(name: &str, expected: &str) -> Self {
        Self::new(format!("Invalid '{}': expected {}", name, expected))
    }
}
