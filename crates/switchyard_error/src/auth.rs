//! Authentication error types.

use derive_more::{Display, Error};

/// Authentication error with location tracking.
///
/// Raised before any network traffic when a signed call lacks a session key
/// or the shared secret needed to compute its signature.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Authentication Error: {} at line {} in {}", message, line, file)]
pub struct AuthError {
    /// What was missing
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AuthError {
    /// Create a new AuthError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A signed call was attempted with no session key available.
    #[track_caller]
    pub fn session_key_required() -> Self {
        Self::new("session key required")
    }

    /// A signed call was attempted with no shared secret configured.
    #[track_caller]
    pub fn secret_required() -> Self {
        Self::new("secret required for signing")
    }
}
