//! Server configuration file.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use switchyard_error::{ConfigError, SwitchyardResult};

/// An upstream service that can be exposed as tools.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Service {
    /// Last.fm methods.
    Lastfm,
    /// Wiki page scraping.
    Wiki,
    /// RapidAPI endpoints.
    Rapidapi,
}

/// Contents of the optional TOML configuration file.
///
/// ```toml
/// services = ["lastfm", "wiki"]
///
/// [lastfm]
/// base_url = "https://ws.audioscrobbler.com/2.0/"
///
/// [wiki]
/// base_url = "https://grokipedia.com/page/"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Services to expose. When absent, every service whose credentials are
    /// available is exposed.
    services: Option<Vec<Service>>,
    /// Last.fm settings.
    lastfm: UpstreamConfig,
    /// Wiki settings.
    wiki: UpstreamConfig,
    /// RapidAPI settings.
    rapidapi: UpstreamConfig,
}

/// Per-service endpoint override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Base URL to use instead of the production endpoint.
    base_url: Option<String>,
}

impl ServerConfig {
    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SwitchyardResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error on invalid TOML or unknown keys.
    pub fn from_toml(content: &str) -> SwitchyardResult<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// True when `service` should be exposed given whether its credentials
    /// are available. A service listed explicitly is exposed regardless, so
    /// missing credentials surface as a startup error.
    pub fn enables(&self, service: Service, has_credentials: bool) -> bool {
        match &self.services {
            Some(services) => services.contains(&service),
            None => has_credentials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_enables_by_credentials() {
        let config = ServerConfig::from_toml("").unwrap();
        assert!(config.enables(Service::Wiki, true));
        assert!(!config.enables(Service::Rapidapi, false));
    }

    #[test]
    fn test_explicit_services() {
        let config = ServerConfig::from_toml(
            r#"
            services = ["lastfm", "wiki"]

            [lastfm]
            base_url = "http://localhost:8080/2.0/"
            "#,
        )
        .unwrap();

        assert!(config.enables(Service::Lastfm, false));
        assert!(config.enables(Service::Wiki, true));
        assert!(!config.enables(Service::Rapidapi, true));
        assert_eq!(
            config.lastfm().base_url().as_deref(),
            Some("http://localhost:8080/2.0/")
        );
        assert_eq!(config.wiki().base_url(), &None);
    }

    #[test]
    fn test_unknown_service_is_rejected() {
        let err = ServerConfig::from_toml(r#"services = ["spotify"]"#).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(ServerConfig::from_toml("timeout = 5").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("/nonexistent/switchyard.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
