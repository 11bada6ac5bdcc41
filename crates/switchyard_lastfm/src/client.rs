//! Async Last.fm client.

use crate::{CallKind, Credentials, MethodSpec, WireRequest, prepare};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use switchyard_core::{Params, build_http_client, read_json, transport_error};
use switchyard_error::{ConfigError, SwitchyardResult};
use tracing::{debug, instrument};

/// Production endpoint of the Last.fm web service.
pub const DEFAULT_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Last.fm API client.
///
/// Cheap to clone; clones share the HTTP connection pool and credentials.
/// Each [`call`](Self::call) makes exactly one request and keeps no state
/// between calls.
#[derive(Debug, Clone)]
pub struct LastfmClient {
    http: Client,
    base_url: String,
    credentials: Arc<Credentials>,
}

impl LastfmClient {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> SwitchyardResult<Self> {
        Self::builder().credentials(credentials).build()
    }

    /// Starts a builder for a client with a custom base URL.
    pub fn builder() -> LastfmClientBuilder {
        LastfmClientBuilder::default()
    }

    /// Credentials the client signs with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Endpoint the client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Assembles the wire parameters for a call without sending it.
    ///
    /// # Errors
    ///
    /// Returns an authentication error for a write call that lacks a
    /// session key or shared secret.
    pub fn prepare(
        &self,
        method: &str,
        params: Params,
        kind: CallKind,
    ) -> SwitchyardResult<WireRequest> {
        prepare(&self.credentials, method, params, kind)
    }

    /// Calls a Last.fm method and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// - authentication error when a write call lacks a session key or secret
    ///   (no request is sent);
    /// - HTTP error on transport failure, timeout or non-success status.
    #[instrument(skip(self, params), fields(base_url = %self.base_url))]
    pub async fn call(
        &self,
        method: &str,
        params: Params,
        kind: CallKind,
    ) -> SwitchyardResult<Value> {
        let request = self.prepare(method, params, kind)?;
        debug!(
            params = ?request.params().iter().map(|(k, _)| k).collect::<Vec<_>>(),
            "Sending Last.fm request"
        );

        let builder = match request.kind() {
            CallKind::Read => self.http.get(&self.base_url).query(request.params()),
            CallKind::Write => self.http.post(&self.base_url).form(request.params()),
        };

        let response = builder.send().await.map_err(transport_error)?;
        Ok(read_json(response).await?)
    }

    /// Calls the method described by `spec` with tool-style JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns an input error when the arguments do not match the method's
    /// parameters, otherwise the errors of [`call`](Self::call).
    pub async fn call_spec(&self, spec: &MethodSpec, args: &Value) -> SwitchyardResult<Value> {
        let params = spec.params_from_args(args)?;
        self.call(spec.method, params, spec.kind).await
    }
}

/// Builder for [`LastfmClient`].
#[derive(Debug, Default)]
pub struct LastfmClientBuilder {
    credentials: Option<Credentials>,
    base_url: Option<String>,
}

impl LastfmClientBuilder {
    /// Sets the credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Overrides the endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no credentials were given, or an
    /// HTTP error if the client cannot be built.
    #[track_caller]
    pub fn build(self) -> SwitchyardResult<LastfmClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| ConfigError::new("Last.fm credentials are required"))?;

        Ok(LastfmClient {
            http: build_http_client()?,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            credentials: Arc::new(credentials),
        })
    }
}
