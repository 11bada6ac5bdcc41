//! Wiki page scraping tool.

use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use serde_json::{Value, json};
use switchyard_wiki::PageScraper;

/// Scrapes a wiki page into structured sections.
///
/// Fetch failures are reported inside the result (`error` instead of
/// `content`) rather than failing the call.
#[derive(Debug, Clone)]
pub struct ScrapePageTool {
    scraper: PageScraper,
}

impl ScrapePageTool {
    /// Creates the tool.
    pub fn new(scraper: PageScraper) -> Self {
        Self { scraper }
    }
}

#[async_trait]
impl McpTool for ScrapePageTool {
    fn name(&self) -> &str {
        "scrape_grokipedia"
    }

    fn description(&self) -> &str {
        "Scrape a Grokipedia page and return structured JSON: page_title, url and \
         content (sections with heading, level and text blocks)."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "page_title": {
                    "type": "string",
                    "description": "The page title, e.g. \"Elon Musk\""
                }
            },
            "required": ["page_title"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let page_title = input
            .get("page_title")
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| McpError::InvalidInput("Missing 'page_title'".to_string()))?;

        let report = self.scraper.scrape_page(page_title).await;
        serde_json::to_value(report)
            .map_err(|e| McpError::ToolExecutionFailed(format!("Failed to encode report: {}", e)))
    }
}
