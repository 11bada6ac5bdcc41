//! RapidAPI HTTP client.

use reqwest::{Client, Method, Url};
use serde_json::Value;
use switchyard_core::{Params, build_http_client, read_json, transport_error};
use switchyard_error::{ConfigError, InputError, SwitchyardResult};
use tracing::{debug, instrument};

/// Client for RapidAPI-hosted endpoints.
///
/// Every request carries `x-rapidapi-key` and an `x-rapidapi-host` header
/// naming the host of the endpoint URL.
#[derive(Clone)]
pub struct RapidApiClient {
    http: Client,
    api_key: String,
    upstream: Option<String>,
}

impl std::fmt::Debug for RapidApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapidApiClient")
            .field("api_key", &"<redacted>")
            .field("upstream", &self.upstream)
            .finish()
    }
}

impl RapidApiClient {
    /// Creates a client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the key is empty.
    #[track_caller]
    pub fn new(api_key: impl Into<String>) -> SwitchyardResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::new(
                "RAPIDAPI_KEY is required: set the environment variable or pass a key",
            )
            .into());
        }

        Ok(Self {
            http: build_http_client()?,
            api_key,
            upstream: None,
        })
    }

    /// Sends every request to `origin` instead of the endpoint's own host.
    ///
    /// The endpoint path is kept and `x-rapidapi-host` still names the
    /// original host, so the upstream sees the same request it would
    /// otherwise.
    pub fn with_upstream(mut self, origin: impl Into<String>) -> Self {
        self.upstream = Some(origin.into());
        self
    }

    /// Sends a `GET` with query parameters.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get(&self, url: &str, params: Params) -> SwitchyardResult<Value> {
        self.request(Method::GET, url, params, None).await
    }

    /// Sends a `POST` with query parameters and a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn post(&self, url: &str, params: Params, body: &Value) -> SwitchyardResult<Value> {
        self.request(Method::POST, url, params, Some(body)).await
    }

    #[instrument(skip(self, params, body))]
    async fn request(
        &self,
        method: Method,
        url: &str,
        params: Params,
        body: Option<&Value>,
    ) -> SwitchyardResult<Value> {
        let endpoint = Url::parse(url)
            .map_err(|e| InputError::new(format!("Invalid endpoint URL '{}': {}", url, e)))?;
        let host = host_header(&endpoint)
            .ok_or_else(|| InputError::new(format!("Endpoint URL '{}' has no host", url)))?;

        let target = match &self.upstream {
            Some(origin) => format!("{}{}", origin.trim_end_matches('/'), endpoint.path()),
            None => url.to_string(),
        };
        debug!(target = %target, host = %host, params = ?params.names(), "Sending RapidAPI request");

        let mut builder = self
            .http
            .request(method, &target)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", host)
            .query(&params.to_wire());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        Ok(read_json(response).await?)
    }
}

/// Host of a URL with its port, if one is given explicitly.
fn host_header(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// The array under `key`, or an empty list when it is absent or null.
pub fn data_array(data: &Value, key: &str) -> Vec<Value> {
    data.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_key_is_config_error() {
        let err = RapidApiClient::new("").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("RAPIDAPI_KEY"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = RapidApiClient::new("super-secret").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }

    #[test]
    fn test_host_header() {
        let url = Url::parse("https://jsearch.p.rapidapi.com/search").unwrap();
        assert_eq!(host_header(&url).as_deref(), Some("jsearch.p.rapidapi.com"));

        let url = Url::parse("http://127.0.0.1:8080/x").unwrap();
        assert_eq!(host_header(&url).as_deref(), Some("127.0.0.1:8080"));
    }

    #[test]
    fn test_data_array_tolerates_null() {
        assert!(data_array(&json!({ "data": null }), "data").is_empty());
        assert!(data_array(&json!({}), "data").is_empty());
        assert_eq!(data_array(&json!({ "data": [1, 2] }), "data").len(), 2);
    }
}
