//! Real-Time News Data endpoints.

use crate::{RapidApiClient, data_array};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use switchyard_core::Params;
use switchyard_error::SwitchyardResult;

const SEARCH_URL: &str = "https://real-time-news-data.p.rapidapi.com/search";
const HEADLINES_URL: &str = "https://real-time-news-data.p.rapidapi.com/top-headlines";
const LOCAL_HEADLINES_URL: &str = "https://real-time-news-data.p.rapidapi.com/local-headlines";
const STORY_COVERAGE_URL: &str = "https://real-time-news-data.p.rapidapi.com/full-story-coverage";

fn default_limit() -> u32 {
    10
}

fn default_country() -> String {
    "US".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_time_published() -> String {
    "anytime".to_string()
}

fn default_sort() -> String {
    "RELEVANCE".to_string()
}

/// Arguments of [`RapidApiClient::search_news`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct NewsSearchRequest {
    /// Search query.
    query: String,
    /// Maximum number of articles.
    #[serde(default = "default_limit")]
    #[builder(default = "default_limit()")]
    limit: u32,
    /// Publication window, e.g. `anytime`, `1d`, `7d`.
    #[serde(default = "default_time_published")]
    #[builder(default = "default_time_published()")]
    time_published: String,
    /// Country code.
    #[serde(default = "default_country")]
    #[builder(default = "default_country()")]
    country: String,
    /// Language code.
    #[serde(default = "default_lang")]
    #[builder(default = "default_lang()")]
    lang: String,
    /// Restrict to one publisher domain.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    source: Option<String>,
}

/// Arguments of [`RapidApiClient::get_headlines`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct HeadlinesRequest {
    /// Maximum number of headlines.
    #[serde(default = "default_limit")]
    #[builder(default = "default_limit()")]
    limit: u32,
    /// Country code.
    #[serde(default = "default_country")]
    #[builder(default = "default_country()")]
    country: String,
    /// Language code.
    #[serde(default = "default_lang")]
    #[builder(default = "default_lang()")]
    lang: String,
}

/// Arguments of [`RapidApiClient::get_local_headlines`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct LocalHeadlinesRequest {
    /// Location, e.g. a city name.
    query: String,
    /// Maximum number of headlines.
    #[serde(default = "default_limit")]
    #[builder(default = "default_limit()")]
    limit: u32,
    /// Country code.
    #[serde(default = "default_country")]
    #[builder(default = "default_country()")]
    country: String,
    /// Language code.
    #[serde(default = "default_lang")]
    #[builder(default = "default_lang()")]
    lang: String,
}

/// Arguments of [`RapidApiClient::get_full_story_coverage`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StoryCoverageRequest {
    /// Story identifier from a previous search.
    story_id: String,
    /// `RELEVANCE` or `DATE`.
    #[serde(default = "default_sort")]
    #[builder(default = "default_sort()")]
    sort: String,
}

/// Copies of the articles under `data`, without their `sub_articles`.
fn articles(data: &Value) -> Vec<Value> {
    data_array(data, "data")
        .into_iter()
        .map(|mut article| {
            if let Some(fields) = article.as_object_mut() {
                fields.remove("sub_articles");
            }
            article
        })
        .collect()
}

impl RapidApiClient {
    /// Searches news articles.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_news(&self, request: &NewsSearchRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("query", request.query.as_str())
            .with("limit", request.limit)
            .with("time_published", request.time_published.as_str())
            .with("country", request.country.as_str())
            .with("lang", request.lang.as_str())
            .with_opt("source", request.source.clone());

        let data = self.get(SEARCH_URL, params).await?;
        let articles = articles(&data);
        Ok(json!({
            "query": request.query,
            "count": articles.len(),
            "articles": articles,
        }))
    }

    /// Fetches the top headlines.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_headlines(&self, request: &HeadlinesRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("limit", request.limit)
            .with("country", request.country.as_str())
            .with("lang", request.lang.as_str());

        let data = self.get(HEADLINES_URL, params).await?;
        let headlines = articles(&data);
        Ok(json!({
            "count": headlines.len(),
            "headlines": headlines,
        }))
    }

    /// Fetches headlines for a location.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_local_headlines(
        &self,
        request: &LocalHeadlinesRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("query", request.query.as_str())
            .with("limit", request.limit)
            .with("country", request.country.as_str())
            .with("lang", request.lang.as_str());

        let data = self.get(LOCAL_HEADLINES_URL, params).await?;
        let headlines = articles(&data);
        Ok(json!({
            "query": request.query,
            "count": headlines.len(),
            "local_headlines": headlines,
        }))
    }

    /// Fetches every article covering one story.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_full_story_coverage(
        &self,
        request: &StoryCoverageRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("story_id", request.story_id.as_str())
            .with("sort", request.sort.as_str());

        let data = self.get(STORY_COVERAGE_URL, params).await?;
        let articles = articles(&data);
        Ok(json!({
            "story_id": request.story_id,
            "count": articles.len(),
            "articles": articles,
        }))
    }
}
