//! Twelve Data market endpoints.

use crate::RapidApiClient;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use switchyard_core::Params;
use switchyard_error::SwitchyardResult;

const PRICE_URL: &str = "https://twelve-data1.p.rapidapi.com/price";
const QUOTE_URL: &str = "https://twelve-data1.p.rapidapi.com/quote";

fn default_format() -> String {
    "json".to_string()
}

fn default_outputsize() -> u32 {
    30
}

/// Arguments of [`RapidApiClient::get_twelve_data_price`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PriceRequest {
    /// Ticker symbol, any case.
    symbol: String,
    /// `json` or `csv`.
    #[serde(default = "default_format")]
    #[builder(default = "default_format()")]
    format: String,
    /// Number of data points.
    #[serde(default = "default_outputsize")]
    #[builder(default = "default_outputsize()")]
    outputsize: u32,
}

/// Arguments of [`RapidApiClient::get_twelve_data_quote`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct QuoteRequest {
    /// Ticker symbol, any case.
    symbol: String,
    /// Bar interval, e.g. `1day` or `1h`.
    interval: String,
    /// `json` or `csv`.
    #[serde(default = "default_format")]
    #[builder(default = "default_format()")]
    format: String,
    /// Number of data points.
    #[serde(default = "default_outputsize")]
    #[builder(default = "default_outputsize()")]
    outputsize: u32,
}

impl RapidApiClient {
    /// Fetches the latest price of a symbol.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_twelve_data_price(&self, request: &PriceRequest) -> SwitchyardResult<Value> {
        let symbol = request.symbol.to_uppercase();
        let params = Params::new()
            .with("symbol", symbol.as_str())
            .with("format", request.format.as_str())
            .with("outputsize", request.outputsize);

        let data = self.get(PRICE_URL, params).await?;
        Ok(json!({ "symbol": symbol, "data": data }))
    }

    /// Fetches a quote for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_twelve_data_quote(&self, request: &QuoteRequest) -> SwitchyardResult<Value> {
        let symbol = request.symbol.to_uppercase();
        let params = Params::new()
            .with("symbol", symbol.as_str())
            .with("interval", request.interval.as_str())
            .with("format", request.format.as_str())
            .with("outputsize", request.outputsize);

        let data = self.get(QUOTE_URL, params).await?;
        Ok(json!({ "symbol": symbol, "data": data }))
    }
}
