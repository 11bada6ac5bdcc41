//! Fetching and scraping wiki pages.

use crate::{Section, sections_from_html};
use reqwest::Client;
use serde::Serialize;
use switchyard_core::{build_http_client, read_text, transport_error};
use switchyard_error::HttpError;
use tracing::{info, instrument, warn};

/// Page prefix of the production wiki.
pub const DEFAULT_BASE_URL: &str = "https://grokipedia.com/page/";

/// Scrapes pages under one base URL.
#[derive(Debug, Clone)]
pub struct PageScraper {
    http: Client,
    base_url: String,
}

/// Result of [`PageScraper::scrape_page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    /// Title as requested.
    pub page_title: String,
    /// URL that was fetched.
    pub url: String,
    /// Extracted sections, or why the fetch failed.
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

/// Either the sections of a page or a fetch failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOutcome {
    /// Sections in document order.
    Content(Vec<Section>),
    /// Rendered fetch failure.
    Error(String),
}

impl PageScraper {
    /// Creates a scraper for [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a scraper for pages under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, HttpError> {
        Ok(Self {
            http: build_http_client()?,
            base_url: base_url.into(),
        })
    }

    /// URL of a page: the base URL followed by the title with spaces
    /// replaced by underscores.
    pub fn page_url(&self, page_title: &str) -> String {
        format!("{}{}", self.base_url, page_title.replace(' ', "_"))
    }

    /// Fetches a page and extracts its sections.
    ///
    /// A page without a recognizable content root yields no sections.
    ///
    /// # Errors
    ///
    /// Returns an [`HttpError`] on transport failure, timeout or a
    /// non-success status.
    #[instrument(skip(self))]
    pub async fn scrape_sections(&self, page_title: &str) -> Result<Vec<Section>, HttpError> {
        let url = self.page_url(page_title);
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let html = read_text(response).await?;

        let sections = sections_from_html(&html);
        info!(url = %url, sections = sections.len(), "Scraped page");
        Ok(sections)
    }

    /// Scrapes a page into a report, rendering a fetch failure into the
    /// report instead of returning it.
    pub async fn scrape_page(&self, page_title: &str) -> PageReport {
        let url = self.page_url(page_title);
        let outcome = match self.scrape_sections(page_title).await {
            Ok(sections) => PageOutcome::Content(sections),
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch page");
                PageOutcome::Error(format!("Failed to fetch page: {}", e.kind))
            }
        };

        PageReport {
            page_title: page_title.to_string(),
            url,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_replaces_spaces() {
        let scraper = PageScraper::new().unwrap();
        assert_eq!(
            scraper.page_url("Test Page"),
            "https://grokipedia.com/page/Test_Page"
        );
    }

    #[test]
    fn test_custom_base_url() {
        let scraper = PageScraper::with_base_url("http://localhost:9/wiki/").unwrap();
        assert_eq!(scraper.page_url("A B C"), "http://localhost:9/wiki/A_B_C");
    }
}
