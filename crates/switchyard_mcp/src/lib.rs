//! Model Context Protocol (MCP) server for Switchyard.
//!
//! Exposes the Last.fm, wiki and RapidAPI adapters as MCP tools over stdio.
//!
//! # Usage
//!
//! ```no_run
//! use switchyard_mcp::{ByteTransport, RouterService, Server, SwitchyardRouter};
//! use switchyard_wiki::PageScraper;
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = SwitchyardRouter::builder()
//!         .name("switchyard")
//!         .wiki(PageScraper::new()?)
//!         .build();
//!
//!     let server = Server::new(RouterService(router));
//!     let transport = ByteTransport::new(stdin(), stdout());
//!     server.run(transport).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod server;
pub mod tools;

pub use config::{ServerConfig, Service, UpstreamConfig};
pub use error::{McpError, McpResult};
pub use server::{SwitchyardRouter, SwitchyardRouterBuilder};
pub use tools::{LastfmMethodTool, McpTool, RapidApiTool, ScrapePageTool, ToolRegistry};

pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};
