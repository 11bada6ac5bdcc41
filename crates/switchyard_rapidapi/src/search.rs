//! Web search and local business endpoints.

use crate::{RapidApiClient, data_array};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use switchyard_core::Params;
use switchyard_error::SwitchyardResult;

const WEB_SEARCH_URL: &str = "https://real-time-web-search.p.rapidapi.com/search-light";
const BUSINESS_SEARCH_URL: &str = "https://local-business-data.p.rapidapi.com/search";
const BUSINESS_DETAILS_URL: &str = "https://local-business-data.p.rapidapi.com/business-details";
const BUSINESS_REVIEWS_URL: &str = "https://local-business-data.p.rapidapi.com/business-reviews";

/// Upper bound the business search endpoint accepts for `limit`.
pub const MAX_BUSINESS_RESULTS: u32 = 50;

fn default_business_limit() -> u32 {
    20
}

fn default_zoom() -> u32 {
    13
}

fn default_language() -> String {
    "en".to_string()
}

fn default_region() -> String {
    "us".to_string()
}

/// Arguments of [`RapidApiClient::search_web`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct WebSearchRequest {
    /// Search query.
    query: String,
}

/// Arguments of [`RapidApiClient::local_business_search`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct BusinessSearchRequest {
    /// What to look for, e.g. `coffee in Seattle`.
    query: String,
    /// Maximum results, capped at [`MAX_BUSINESS_RESULTS`].
    #[serde(default = "default_business_limit")]
    #[builder(default = "default_business_limit()")]
    limit: u32,
    /// Latitude of the search center.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    lat: Option<f64>,
    /// Longitude of the search center.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    lng: Option<f64>,
    /// Map zoom level.
    #[serde(default = "default_zoom")]
    #[builder(default = "default_zoom()")]
    zoom: u32,
    /// Language code.
    #[serde(default = "default_language")]
    #[builder(default = "default_language()")]
    language: String,
    /// Region code.
    #[serde(default = "default_region")]
    #[builder(default = "default_region()")]
    region: String,
    /// Scrape contact details from business websites.
    #[serde(default)]
    #[builder(default)]
    extract_emails_and_contacts: bool,
    /// Comma-separated business subtypes.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    subtypes: Option<String>,
    /// Only verified businesses.
    #[serde(default)]
    #[builder(default)]
    verified: bool,
    /// `OPEN`, `CLOSED_TEMPORARILY` or `CLOSED`.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    business_status: Option<String>,
    /// Comma-separated fields to return.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    fields: Option<String>,
}

/// Arguments of [`RapidApiClient::get_business_details`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct BusinessDetailsRequest {
    /// Business identifier from a search.
    business_id: String,
    /// Scrape contact details from the business website.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    extract_emails_and_contacts: Option<bool>,
    /// Include a share link.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    extract_share_link: Option<bool>,
    /// Comma-separated fields to return.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    fields: Option<String>,
    /// Region code.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    region: Option<String>,
    /// Language code.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    language: Option<String>,
}

/// Arguments of [`RapidApiClient::get_business_reviews`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct BusinessReviewsRequest {
    /// Business identifier from a search.
    business_id: String,
    /// Maximum reviews.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    limit: Option<u32>,
    /// Offset for paging.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    offset: Option<u32>,
    /// Translate reviews into the request language.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    translate_reviews: Option<bool>,
    /// Only reviews matching this text.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    query: Option<String>,
    /// `most_relevant`, `newest`, `highest_ranking` or `lowest_ranking`.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    sort_by: Option<String>,
    /// Comma-separated fields to return.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    fields: Option<String>,
    /// Region code.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    region: Option<String>,
}

impl RapidApiClient {
    /// Runs a general web search.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_web(&self, request: &WebSearchRequest) -> SwitchyardResult<Value> {
        let params = Params::new().with("q", request.query.as_str());

        let data = self.get(WEB_SEARCH_URL, params).await?;
        let results = data_array(&data, "data");
        Ok(json!({
            "query": request.query,
            "count": results.len(),
            "results": results,
        }))
    }

    /// Searches local businesses.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn local_business_search(
        &self,
        request: &BusinessSearchRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("query", request.query.as_str())
            .with("limit", request.limit.min(MAX_BUSINESS_RESULTS))
            .with_opt("lat", request.lat.map(|v| v.to_string()))
            .with_opt("lng", request.lng.map(|v| v.to_string()))
            .with("zoom", request.zoom)
            .with("language", request.language.as_str())
            .with("region", request.region.as_str())
            .with("extract_emails_and_contacts", request.extract_emails_and_contacts)
            .with_opt("subtypes", request.subtypes.clone())
            .with("verified", request.verified)
            .with_opt("business_status", request.business_status.clone())
            .with_opt("fields", request.fields.clone());

        let data = self.get(BUSINESS_SEARCH_URL, params).await?;
        let businesses = data_array(&data, "data");
        Ok(json!({
            "query": request.query,
            "count": businesses.len(),
            "businesses": businesses,
        }))
    }

    /// Fetches details of one business.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_business_details(
        &self,
        request: &BusinessDetailsRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("business_id", request.business_id.as_str())
            .with_opt("extract_emails_and_contacts", request.extract_emails_and_contacts)
            .with_opt("extract_share_link", request.extract_share_link)
            .with_opt("fields", request.fields.clone())
            .with_opt("region", request.region.clone())
            .with_opt("language", request.language.clone());

        let data = self.get(BUSINESS_DETAILS_URL, params).await?;
        Ok(json!({
            "business_id": request.business_id,
            "business": data.get("data").cloned().unwrap_or_else(|| json!({})),
        }))
    }

    /// Fetches reviews of one business.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_business_reviews(
        &self,
        request: &BusinessReviewsRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("business_id", request.business_id.as_str())
            .with_opt("limit", request.limit)
            .with_opt("offset", request.offset)
            .with_opt("translate_reviews", request.translate_reviews)
            .with_opt("query", request.query.clone())
            .with_opt("sort_by", request.sort_by.clone())
            .with_opt("fields", request.fields.clone())
            .with_opt("region", request.region.clone());

        let data = self.get(BUSINESS_REVIEWS_URL, params).await?;
        let reviews = data_array(&data, "data");
        Ok(json!({
            "business_id": request.business_id,
            "count": reviews.len(),
            "reviews": reviews,
        }))
    }
}
