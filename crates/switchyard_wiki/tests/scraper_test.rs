//! Tests for page scraping against an in-process server.

use axum::{Router, extract::Path, http::StatusCode, routing::get};
use serde_json::json;
use switchyard_wiki::{PageOutcome, PageScraper};

const SAMPLE_PAGE: &str = r#"
<html>
<body>
    <nav><p>Navigation</p></nav>
    <article>
        <h1>Test Page</h1>
        <p>This is a test paragraph.</p>
        <h2>Section 1</h2>
        <p>Content for section 1.</p>
        <li>Bullet point 1</li>
        <li>Bullet point 2</li>
        <h3>Subsection</h3>
        <p>More content.</p>
    </article>
</body>
</html>
"#;

const CONTENT_DIV_PAGE: &str = r#"
<html>
<body>
    <div id="content">
        <h2>Main Section</h2>
        <p>Regular paragraph</p>
        <span>Span content</span>
        <ul><li>List item 1</li></ul>
    </div>
</body>
</html>
"#;

async fn spawn_wiki() -> String {
    let app = Router::new().route(
        "/page/{title}",
        get(|Path(title): Path<String>| async move {
            match title.as_str() {
                "Test_Page" => (StatusCode::OK, SAMPLE_PAGE.to_string()),
                "Content_Div" => (StatusCode::OK, CONTENT_DIV_PAGE.to_string()),
                "Empty" => (
                    StatusCode::OK,
                    "<html><body>No content here</body></html>".to_string(),
                ),
                _ => (StatusCode::NOT_FOUND, "Page not found".to_string()),
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/page/", addr)
}

#[tokio::test]
async fn test_scrape_sections_from_article() {
    let scraper = PageScraper::with_base_url(spawn_wiki().await).unwrap();
    let sections = scraper.scrape_sections("Test Page").await.unwrap();

    assert_eq!(sections.len(), 3);

    assert_eq!(sections[0].heading().as_deref(), Some("Test Page"));
    assert_eq!(*sections[0].level(), Some(1));
    assert_eq!(sections[0].blocks(), &vec!["This is a test paragraph.".to_string()]);

    assert_eq!(sections[1].heading().as_deref(), Some("Section 1"));
    assert_eq!(
        sections[1].blocks(),
        &vec![
            "Content for section 1.".to_string(),
            "• Bullet point 1".to_string(),
            "• Bullet point 2".to_string(),
        ]
    );

    assert_eq!(sections[2].heading().as_deref(), Some("Subsection"));
    assert_eq!(*sections[2].level(), Some(3));
}

#[tokio::test]
async fn test_scrape_sections_content_div() {
    let scraper = PageScraper::with_base_url(spawn_wiki().await).unwrap();
    let sections = scraper.scrape_sections("Content Div").await.unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].heading().as_deref(), Some("Main Section"));
    assert_eq!(sections[0].blocks().len(), 3);
}

#[tokio::test]
async fn test_page_without_content_is_empty() {
    let scraper = PageScraper::with_base_url(spawn_wiki().await).unwrap();
    let sections = scraper.scrape_sections("Empty").await.unwrap();
    assert!(sections.is_empty());
}

#[tokio::test]
async fn test_missing_page_is_http_error() {
    let scraper = PageScraper::with_base_url(spawn_wiki().await).unwrap();
    let err = scraper.scrape_sections("Nonexistent").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_scrape_page_report_serialization() {
    let scraper = PageScraper::with_base_url(spawn_wiki().await).unwrap();
    let report = scraper.scrape_page("Test Page").await;

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["page_title"], "Test Page");
    assert!(value["url"].as_str().unwrap().ends_with("/page/Test_Page"));
    assert_eq!(value["content"][0]["heading"], "Test Page");
    assert_eq!(value["content"][0]["level"], 1);
    assert!(value.get("error").is_none());
}

#[tokio::test]
async fn test_scrape_page_renders_failures() {
    let scraper = PageScraper::with_base_url(spawn_wiki().await).unwrap();
    let report = scraper.scrape_page("Missing Page").await;

    match &report.outcome {
        PageOutcome::Error(message) => {
            assert!(message.starts_with("Failed to fetch page"));
            assert!(message.contains("404"));
        }
        other => panic!("expected error outcome, got {:?}", other),
    }

    let value = serde_json::to_value(&report).unwrap();
    assert!(value.get("content").is_none());
    assert_eq!(value["page_title"], json!("Missing Page"));
}

#[tokio::test]
async fn test_unreachable_host_is_reported() {
    let scraper = PageScraper::with_base_url("http://127.0.0.1:1/page/").unwrap();
    let report = scraper.scrape_page("Anything").await;
    assert!(matches!(report.outcome, PageOutcome::Error(_)));
}
