//! Tests for the MCP router with live adapters against in-process upstreams.

use axum::{Form, Json, Router as AxumRouter, extract::Query, routing::get};
use serde_json::{Value, json};
use std::collections::HashMap;
use switchyard_lastfm::{Credentials, LastfmClient, METHODS};
use switchyard_mcp::{Router, SwitchyardRouter, ToolRegistry};
use switchyard_rapidapi::RapidApiClient;
use switchyard_wiki::PageScraper;

const PAGE: &str = r#"<html><body><article>
    <h1>Switchyard</h1>
    <p>A place where trains are sorted.</p>
    <h2>Layout</h2>
    <ul><li>Hump</li><li>Bowl</li></ul>
</article></body></html>"#;

async fn spawn_upstream() -> String {
    let app = AxumRouter::new()
        .route(
            "/2.0/",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                Json(json!({ "echo": query }))
            })
            .post(|Form(form): Form<HashMap<String, String>>| async move {
                Json(json!({ "echo": form }))
            }),
        )
        .route("/page/Switchyard", get(|| async { PAGE }))
        .route(
            "/search-light",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                Json(json!({ "data": [{ "q": query.get("q") }] }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn router(secret: Option<&str>) -> SwitchyardRouter {
    let base = spawn_upstream().await;

    let credentials =
        Credentials::new("test-key", secret.map(str::to_string), None).unwrap();
    let lastfm = LastfmClient::builder()
        .credentials(credentials)
        .base_url(format!("{}/2.0/", base))
        .build()
        .unwrap();
    let scraper = PageScraper::with_base_url(format!("{}/page/", base)).unwrap();
    let rapidapi = RapidApiClient::new("rapid-key").unwrap().with_upstream(base);

    SwitchyardRouter::builder()
        .name("switchyard-test")
        .lastfm(lastfm)
        .wiki(scraper)
        .rapidapi(rapidapi)
        .build()
}

fn text_payload(content: &[mcp_spec::content::Content]) -> Value {
    let text = content[0].as_text().expect("text content");
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn test_lists_every_registered_tool() {
    let router = router(None).await;
    let tools = router.list_tools();

    assert_eq!(tools.len(), METHODS.len() + 1 + 33);
    assert!(tools.iter().any(|t| t.name == "scrape_grokipedia"));
    assert!(tools.iter().any(|t| t.name == "search_rental_properties"));
    assert!(tools.iter().any(|t| t.name == "get_trending_topics"));
    assert!(tools.iter().any(|t| t.name == "album_get_info"));
    assert!(tools.iter().any(|t| t.name == "search_recipes"));
    assert!(router.instructions().contains("scrape_grokipedia"));
}

#[tokio::test]
async fn test_lastfm_read_tool() {
    let router = router(None).await;
    let content = router
        .call_tool("artist_get_info", json!({ "artist": "Cher", "autocorrect": true }))
        .await
        .unwrap();

    let payload = text_payload(&content);
    assert_eq!(payload["echo"]["method"], "artist.getinfo");
    assert_eq!(payload["echo"]["autocorrect"], "1");
    assert_eq!(payload["echo"]["format"], "json");
}

#[tokio::test]
async fn test_lastfm_write_tool_with_caller_session() {
    let router = router(Some("secret")).await;
    let content = router
        .call_tool(
            "track_love",
            json!({ "artist": "Cher", "track": "Believe", "sk": "CALLER" }),
        )
        .await
        .unwrap();

    let payload = text_payload(&content);
    assert_eq!(payload["echo"]["sk"], "CALLER");
    assert_eq!(payload["echo"]["api_sig"].as_str().unwrap().len(), 32);
}

#[tokio::test]
async fn test_lastfm_write_without_session_fails() {
    let router = router(Some("secret")).await;
    let err = router
        .call_tool("track_love", json!({ "artist": "Cher", "track": "Believe" }))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("session key required"));
}

#[tokio::test]
async fn test_scrape_tool() {
    let router = router(None).await;
    let content = router
        .call_tool("scrape_grokipedia", json!({ "page_title": "Switchyard" }))
        .await
        .unwrap();

    let payload = text_payload(&content);
    assert_eq!(payload["page_title"], "Switchyard");
    assert_eq!(payload["content"][0]["heading"], "Switchyard");
    assert_eq!(payload["content"][1]["blocks"], json!(["• Hump", "• Bowl"]));
}

#[tokio::test]
async fn test_scrape_tool_reports_missing_page() {
    let router = router(None).await;
    let content = router
        .call_tool("scrape_grokipedia", json!({ "page_title": "No Such Page" }))
        .await
        .unwrap();

    let payload = text_payload(&content);
    assert!(payload["error"].as_str().unwrap().contains("404"));
    assert!(payload.get("content").is_none());
}

#[tokio::test]
async fn test_rapidapi_tool() {
    let router = router(None).await;
    let content = router
        .call_tool("search_web", json!({ "query": "rail yards" }))
        .await
        .unwrap();

    let payload = text_payload(&content);
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["results"][0]["q"], "rail yards");
}

#[tokio::test]
async fn test_unknown_tool() {
    let router = router(None).await;
    let err = router.call_tool("no_such_tool", json!({})).await.unwrap_err();
    assert!(err.to_string().contains("no_such_tool"));
}

#[test]
fn test_empty_router() {
    let router = SwitchyardRouter::builder().build();
    assert_eq!(router.name(), "switchyard");
    assert!(router.list_tools().is_empty());
    assert!(router.tools().is_empty());
}

#[test]
fn test_registry_is_shared_by_router_clones() {
    let router = SwitchyardRouter::builder().build();
    let registry: ToolRegistry = router.clone().tools().clone();
    assert_eq!(registry.len(), router.tools().len());
}
