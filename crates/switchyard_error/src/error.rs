//! Crate-level error enum and wrapper.

use crate::{AuthError, ConfigError, HttpError, InputError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum SwitchyardErrorKind {
    /// Missing credential or unusable configuration
    #[display("{_0}")]
    Config(ConfigError),
    /// Signed call without session key or secret
    #[display("{_0}")]
    Auth(AuthError),
    /// Non-success status or transport failure
    #[display("{_0}")]
    Http(HttpError),
    /// Invalid tool arguments
    #[display("{_0}")]
    Input(InputError),
}

/// Switchyard error with kind discrimination.
#[derive(Debug)]
pub struct SwitchyardError(Box<SwitchyardErrorKind>);

impl SwitchyardError {
    /// Create a new error from a kind.
    pub fn new(kind: SwitchyardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SwitchyardErrorKind {
        &self.0
    }

    /// True when the failure is an authentication gate.
    pub fn is_auth(&self) -> bool {
        matches!(*self.0, SwitchyardErrorKind::Auth(_))
    }

    /// True when the failure is a missing or invalid configuration.
    pub fn is_config(&self) -> bool {
        matches!(*self.0, SwitchyardErrorKind::Config(_))
    }

    /// Returns the HTTP error if this failure came from the transport layer.
    pub fn as_http(&self) -> Option<&HttpError> {
        match &*self.0 {
            SwitchyardErrorKind::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for SwitchyardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Switchyard Error: {}", self.0)
    }
}

impl std::error::Error for SwitchyardError {}

// Generic From implementation for any type that converts to SwitchyardErrorKind
impl<T> From<T> for SwitchyardError
where
    T: Into<SwitchyardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Switchyard operations.
pub type SwitchyardResult<T> = std::result::Result<T, SwitchyardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions_preserve_kind() {
        let err: SwitchyardError = AuthError::secret_required().into();
        assert!(err.is_auth());
        assert!(!err.is_config());

        let err: SwitchyardError = ConfigError::new("LASTFM_API_KEY is required").into();
        assert!(err.is_config());

        let err: SwitchyardError = HttpError::status(503, "down").into();
        assert_eq!(err.as_http().and_then(|e| e.status_code()), Some(503));
    }

    #[test]
    fn test_display_includes_message_and_location() {
        let err: SwitchyardError = AuthError::session_key_required().into();
        let text = err.to_string();
        assert!(text.contains("session key required"));
        assert!(text.contains("error.rs"));
    }
}
