//! MCP tools and their registry.

mod lastfm;
mod rapidapi;
mod wiki;

pub use lastfm::LastfmMethodTool;
pub use rapidapi::RapidApiTool;
pub use wiki::ScrapePageTool;

use crate::{McpError, McpResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A callable tool.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name.
    fn name(&self) -> &str;

    /// What the tool does, for discovery.
    fn description(&self) -> &str;

    /// JSON schema of the arguments.
    fn input_schema(&self) -> Value;

    /// Runs the tool.
    async fn execute(&self, input: Value) -> McpResult<Value>;
}

/// Cheaply cloneable set of tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<Vec<Arc<dyn McpTool>>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool. A tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        debug!(tool = tool.name(), "Registering tool");
        let tools = Arc::make_mut(&mut self.tools);
        tools.retain(|existing| existing.name() != tool.name());
        tools.push(tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// All tools in registration order.
    pub fn list(&self) -> &[Arc<dyn McpTool>] {
        &self.tools
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Runs the named tool.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::ToolNotFound`] for an unknown name, otherwise the
    /// tool's own error.
    #[instrument(skip(self, input))]
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;
        tool.execute(input).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field(
                "tools",
                &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
