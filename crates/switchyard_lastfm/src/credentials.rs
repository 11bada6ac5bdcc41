//! Last.fm credentials.

use switchyard_error::ConfigError;

/// API credentials for one Last.fm client.
///
/// Immutable once constructed. Empty strings for the optional parts are
/// treated as absent.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: Option<String>,
    session_key: Option<String>,
}

impl Credentials {
    /// Creates credentials, rejecting an empty API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `api_key` is empty.
    #[track_caller]
    pub fn new(
        api_key: impl Into<String>,
        api_secret: Option<String>,
        session_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::new("LASTFM_API_KEY is required"));
        }

        Ok(Self {
            api_key,
            api_secret: api_secret.filter(|s| !s.is_empty()),
            session_key: session_key.filter(|s| !s.is_empty()),
        })
    }

    /// The public API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The shared secret used for signing, if configured.
    pub fn api_secret(&self) -> Option<&str> {
        self.api_secret.as_deref()
    }

    /// The stored user session key, if configured.
    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("session_key", &self.session_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
