//! Switchyard MCP server binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use switchyard_lastfm::{Credentials, LastfmClient};
use switchyard_mcp::{
    ByteTransport, Router, RouterService, Server, ServerConfig, Service, SwitchyardRouter,
};
use switchyard_rapidapi::RapidApiClient;
use switchyard_wiki::PageScraper;
use tokio::io::{stdin, stdout};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the MCP server.
#[derive(Parser)]
#[command(name = "switchyard-mcp")]
#[command(about = "Expose Last.fm, wiki and RapidAPI adapters as MCP tools over stdio")]
#[command(version)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Last.fm API key
    #[arg(long, env = "LASTFM_API_KEY", hide_env_values = true)]
    lastfm_api_key: Option<String>,

    /// Last.fm shared secret, needed for write methods
    #[arg(long, env = "LASTFM_API_SECRET", hide_env_values = true)]
    lastfm_api_secret: Option<String>,

    /// Last.fm session key used when a write call supplies none
    #[arg(long, env = "LASTFM_SESSION_KEY", hide_env_values = true)]
    lastfm_session_key: Option<String>,

    /// RapidAPI key
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    rapidapi_key: Option<String>,
}

fn has_value(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Logs go to stderr; stdout carries the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting Switchyard MCP server");

    let config = match &args.config {
        Some(path) => {
            info!(config_file = ?path, "Loading configuration");
            ServerConfig::from_file(path).context("Failed to load configuration")?
        }
        None => ServerConfig::default(),
    };

    let mut builder = SwitchyardRouter::builder()
        .name("switchyard")
        .version(env!("CARGO_PKG_VERSION"));

    if config.enables(Service::Lastfm, has_value(&args.lastfm_api_key)) {
        let credentials = Credentials::new(
            args.lastfm_api_key.clone().unwrap_or_default(),
            args.lastfm_api_secret.clone(),
            args.lastfm_session_key.clone(),
        )?;
        if credentials.api_secret().is_none() {
            warn!("LASTFM_API_SECRET not set - write methods will fail");
        }

        let mut client = LastfmClient::builder().credentials(credentials);
        if let Some(base_url) = config.lastfm().base_url() {
            client = client.base_url(base_url.as_str());
        }
        builder = builder.lastfm(client.build()?);
        info!("Last.fm tools enabled");
    } else {
        info!(service = %Service::Lastfm, "Service disabled");
    }

    if config.enables(Service::Wiki, true) {
        let scraper = match config.wiki().base_url() {
            Some(base_url) => PageScraper::with_base_url(base_url.as_str())?,
            None => PageScraper::new()?,
        };
        builder = builder.wiki(scraper);
        info!("Wiki tools enabled");
    } else {
        info!(service = %Service::Wiki, "Service disabled");
    }

    if config.enables(Service::Rapidapi, has_value(&args.rapidapi_key)) {
        let mut client = RapidApiClient::new(args.rapidapi_key.clone().unwrap_or_default())?;
        if let Some(base_url) = config.rapidapi().base_url() {
            client = client.with_upstream(base_url.as_str());
        }
        builder = builder.rapidapi(client);
        info!("RapidAPI tools enabled");
    } else {
        info!(service = %Service::Rapidapi, "Service disabled");
    }

    let router = builder.build();
    info!(tools = router.list_tools().len(), "Router initialized");

    let server = Server::new(RouterService(router));
    let transport = ByteTransport::new(stdin(), stdout());

    info!("Server ready, listening on stdio");
    server.run(transport).await?;

    Ok(())
}
