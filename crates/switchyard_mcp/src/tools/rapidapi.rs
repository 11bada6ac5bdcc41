//! RapidAPI endpoints as tools.

use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use serde_json::Value;
use strum::IntoEnumIterator;
use switchyard_rapidapi::{Endpoint, RapidApiClient};

/// One RapidAPI endpoint exposed as a tool.
#[derive(Debug, Clone)]
pub struct RapidApiTool {
    endpoint: Endpoint,
    client: RapidApiClient,
}

impl RapidApiTool {
    /// Creates the tool for one endpoint.
    pub fn new(endpoint: Endpoint, client: RapidApiClient) -> Self {
        Self { endpoint, client }
    }

    /// Creates a tool for every endpoint.
    pub fn all(client: &RapidApiClient) -> Vec<Self> {
        Endpoint::iter()
            .map(|endpoint| Self::new(endpoint, client.clone()))
            .collect()
    }
}

#[async_trait]
impl McpTool for RapidApiTool {
    fn name(&self) -> &str {
        self.endpoint.name()
    }

    fn description(&self) -> &str {
        self.endpoint.description()
    }

    fn input_schema(&self) -> Value {
        self.endpoint.input_schema()
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        self.endpoint
            .invoke(&self.client, input)
            .await
            .map_err(McpError::from_adapter)
    }
}
