//! JSearch job listing endpoints.

use crate::{RapidApiClient, data_array};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use switchyard_core::Params;
use switchyard_error::SwitchyardResult;

const SEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const DETAILS_URL: &str = "https://jsearch.p.rapidapi.com/job-details";

fn default_page() -> u32 {
    1
}

fn default_country() -> String {
    "us".to_string()
}

fn default_date_posted() -> String {
    "all".to_string()
}

/// Arguments of [`RapidApiClient::search_jobs`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct JobSearchRequest {
    /// Free-form query, e.g. `rust developer in Berlin`.
    query: String,
    /// First page to return.
    #[serde(default = "default_page")]
    #[builder(default = "default_page()")]
    page: u32,
    /// Number of pages to return.
    #[serde(default = "default_page")]
    #[builder(default = "default_page()")]
    num_pages: u32,
    /// Country code.
    #[serde(default = "default_country")]
    #[builder(default = "default_country()")]
    country: String,
    /// `all`, `today`, `3days`, `week` or `month`.
    #[serde(default = "default_date_posted")]
    #[builder(default = "default_date_posted()")]
    date_posted: String,
    /// Only remote jobs.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    work_from_home: Option<bool>,
    /// Comma-separated employment types, e.g. `FULLTIME,CONTRACTOR`.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    employment_types: Option<String>,
    /// Comma-separated requirement filters.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    job_requirements: Option<String>,
    /// Search radius in km.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    radius: Option<u32>,
    /// Comma-separated publishers to exclude.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    exclude_job_publishers: Option<String>,
    /// Comma-separated fields to return.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    fields: Option<String>,
}

/// Arguments of [`RapidApiClient::get_job_details`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct JobDetailsRequest {
    /// Job identifier from a search.
    job_id: String,
    /// Country code.
    #[serde(default = "default_country")]
    #[builder(default = "default_country()")]
    country: String,
    /// Language code.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    language: Option<String>,
    /// Comma-separated fields to return.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    fields: Option<String>,
}

fn envelope(data: &Value, key: &str) -> Value {
    data.get(key).cloned().unwrap_or(Value::Null)
}

impl RapidApiClient {
    /// Searches job listings.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_jobs(&self, request: &JobSearchRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("query", request.query.as_str())
            .with("page", request.page)
            .with("num_pages", request.num_pages)
            .with("country", request.country.as_str())
            .with("date_posted", request.date_posted.as_str())
            .with_opt("work_from_home", request.work_from_home)
            .with_opt("employment_types", request.employment_types.clone())
            .with_opt("job_requirements", request.job_requirements.clone())
            .with_opt("radius", request.radius)
            .with_opt("exclude_job_publishers", request.exclude_job_publishers.clone())
            .with_opt("fields", request.fields.clone());

        let data = self.get(SEARCH_URL, params).await?;
        let results = data_array(&data, "data");
        Ok(json!({
            "query": request.query,
            "page": request.page,
            "count": results.len(),
            "results": results,
            "status": envelope(&data, "status"),
            "request_id": envelope(&data, "request_id"),
            "parameters": envelope(&data, "parameters"),
        }))
    }

    /// Fetches one job posting.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_job_details(&self, request: &JobDetailsRequest) -> SwitchyardResult<Value> {
        let params = Params::new()
            .with("job_id", request.job_id.as_str())
            .with("country", request.country.as_str())
            .with_opt("language", request.language.clone())
            .with_opt("fields", request.fields.clone());

        let data = self.get(DETAILS_URL, params).await?;
        Ok(json!({
            "job_id": request.job_id,
            "data": data.get("data").cloned().unwrap_or_else(|| data.clone()),
            "status": envelope(&data, "status"),
            "request_id": envelope(&data, "request_id"),
            "parameters": envelope(&data, "parameters"),
        }))
    }
}
