//! MCP router.

use crate::tools::{LastfmMethodTool, McpTool, RapidApiTool, ScrapePageTool, ToolRegistry};
use crate::McpError;
use mcp_server::Router;
use mcp_server::router::CapabilitiesBuilder;
use mcp_spec::{
    content::Content,
    handler::{PromptError, ResourceError, ToolError},
    protocol::ServerCapabilities,
    prompt::Prompt,
    resource::Resource,
    tool::Tool,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use switchyard_lastfm::LastfmClient;
use switchyard_rapidapi::RapidApiClient;
use switchyard_wiki::PageScraper;
use tracing::{debug, info, instrument, warn};

/// MCP router exposing the registered adapters as tools.
#[derive(Clone)]
pub struct SwitchyardRouter {
    name: String,
    version: String,
    tools: ToolRegistry,
}

impl SwitchyardRouter {
    /// Creates a new router builder.
    pub fn builder() -> SwitchyardRouterBuilder {
        SwitchyardRouterBuilder::default()
    }

    /// The registered tools.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

impl Router for SwitchyardRouter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn instructions(&self) -> String {
        format!(
            "Switchyard MCP Server v{}\n\n\
            This server exposes third-party web APIs as tools: Last.fm music metadata, \
            structured wiki page content and RapidAPI search, news, finance, job and recipe \
            endpoints.\n\n\
            Available tools: {}",
            self.version,
            self.tools
                .list()
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new().with_tools(false).build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .list()
            .iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    #[instrument(skip(self, arguments), fields(tool = %tool_name))]
    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        debug!(tool = %tool_name, "Tool called");

        let tools = self.tools.clone();
        let tool_name = tool_name.to_string();

        Box::pin(async move {
            match tools.execute(&tool_name, arguments).await {
                Ok(result) => {
                    info!(tool = %tool_name, "Tool executed successfully");
                    let text = serde_json::to_string_pretty(&result)
                        .unwrap_or_else(|_| result.to_string());
                    Ok(vec![Content::text(text)])
                }
                Err(e) => {
                    warn!(tool = %tool_name, error = %e, "Tool execution failed");
                    Err(match e {
                        McpError::InvalidInput(msg) => ToolError::InvalidParameters(msg),
                        McpError::ToolNotFound(name) => ToolError::NotFound(name),
                        other => ToolError::ExecutionError(other.to_string()),
                    })
                }
            }
        })
    }

    fn list_resources(&self) -> Vec<Resource> {
        vec![]
    }

    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        let uri = uri.to_string();
        Box::pin(async move { Err(ResourceError::NotFound(format!("No resource at {}", uri))) })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        vec![]
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let prompt_name = prompt_name.to_string();
        Box::pin(async move {
            Err(PromptError::NotFound(format!(
                "Prompt {} not found",
                prompt_name
            )))
        })
    }
}

/// Builder for [`SwitchyardRouter`].
#[derive(Default)]
pub struct SwitchyardRouterBuilder {
    name: Option<String>,
    version: Option<String>,
    tools: ToolRegistry,
}

impl SwitchyardRouterBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Registers one tool.
    pub fn tool(mut self, tool: impl McpTool + 'static) -> Self {
        self.tools.register(Arc::new(tool));
        self
    }

    /// Registers every Last.fm method.
    pub fn lastfm(self, client: LastfmClient) -> Self {
        LastfmMethodTool::all(&client)
            .into_iter()
            .fold(self, |builder, tool| builder.tool(tool))
    }

    /// Registers the wiki scraping tool.
    pub fn wiki(self, scraper: PageScraper) -> Self {
        self.tool(ScrapePageTool::new(scraper))
    }

    /// Registers every RapidAPI endpoint.
    pub fn rapidapi(self, client: RapidApiClient) -> Self {
        RapidApiTool::all(&client)
            .into_iter()
            .fold(self, |builder, tool| builder.tool(tool))
    }

    /// Builds the router.
    pub fn build(self) -> SwitchyardRouter {
        SwitchyardRouter {
            name: self.name.unwrap_or_else(|| "switchyard".to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            tools: self.tools,
        }
    }
}
