//! Zillow rental endpoints.

use crate::RapidApiClient;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use switchyard_core::Params;
use switchyard_error::SwitchyardResult;

const RENTAL_SEARCH_URL: &str = "https://zillow-com4.p.rapidapi.com/v2/properties/search-for-rent";
const PROPERTY_DETAILS_URL: &str = "https://zillow-com4.p.rapidapi.com/v2/properties/detail";

fn default_page() -> u32 {
    1
}

fn default_sort() -> String {
    "relevance".to_string()
}

/// Arguments of [`RapidApiClient::search_rental_properties`].
///
/// Range filters (`price`, `bedrooms`, `home_size`, ...) are passed through
/// as the JSON objects Zillow expects, e.g. `{"min": 1000, "max": 2500}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RentalSearchRequest {
    /// City, neighborhood or ZIP code.
    location: String,
    /// Result page, starting at 1.
    #[serde(default = "default_page")]
    #[builder(default = "default_page()")]
    page: u32,
    /// Sort order.
    #[serde(default = "default_sort")]
    #[builder(default = "default_sort()")]
    sort_by: String,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    price: Option<Value>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    bedrooms: Option<Value>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    min_bathrooms: Option<u32>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    home_types: Option<Vec<String>>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    move_in_date: Option<String>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    rental_amenities: Option<Vec<String>>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    popular_filters: Option<Vec<String>>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    home_size: Option<Value>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    lot_size: Option<Value>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    year_built: Option<Value>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    basement_types: Option<Vec<String>>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    amenities: Option<Vec<String>>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    views: Option<Vec<String>>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    time_on_zillow: Option<Value>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    keywords: Option<Vec<String>>,
}

impl RentalSearchRequest {
    /// The camel-cased search body, without absent filters.
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("location".into(), json!(self.location));
        body.insert("page".into(), json!(self.page));
        body.insert("sortBy".into(), json!(self.sort_by));

        let optional = [
            ("price", self.price.clone()),
            ("bedrooms", self.bedrooms.clone()),
            ("minBathrooms", self.min_bathrooms.map(Value::from)),
            ("homeTypes", self.home_types.clone().map(Value::from)),
            ("moveInDate", self.move_in_date.clone().map(Value::from)),
            ("rentalAmenities", self.rental_amenities.clone().map(Value::from)),
            ("popularFilters", self.popular_filters.clone().map(Value::from)),
            ("homeSize", self.home_size.clone()),
            ("lotSize", self.lot_size.clone()),
            ("yearBuilt", self.year_built.clone()),
            ("basementTypes", self.basement_types.clone().map(Value::from)),
            ("amenities", self.amenities.clone().map(Value::from)),
            ("views", self.views.clone().map(Value::from)),
            ("timeOnZillow", self.time_on_zillow.clone()),
            ("keywords", self.keywords.clone().map(Value::from)),
        ];
        for (name, value) in optional {
            if let Some(value) = value.filter(|v| !v.is_null()) {
                body.insert(name.into(), value);
            }
        }

        Value::Object(body)
    }
}

/// Arguments of [`RapidApiClient::get_property_details`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PropertyDetailsRequest {
    /// Zillow property id.
    zpid: String,
}

/// Listings of a rental search response, which uses `props` or `results`.
fn listings(data: &Value) -> Value {
    ["props", "results"]
        .iter()
        .filter_map(|key| data.get(*key))
        .find(|value| is_truthy(value))
        .cloned()
        .unwrap_or_else(|| data.clone())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

impl RapidApiClient {
    /// Searches rental listings.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_rental_properties(
        &self,
        request: &RentalSearchRequest,
    ) -> SwitchyardResult<Value> {
        let data = self
            .post(RENTAL_SEARCH_URL, Params::new(), &request.body())
            .await?;

        let properties = listings(&data);
        let count = properties.as_array().map_or(0, Vec::len);
        let total = ["totalResultCount", "totalCount"]
            .iter()
            .filter_map(|key| data.get(*key))
            .find(|value| is_truthy(value) && *value != &json!(0))
            .cloned()
            .unwrap_or(Value::Null);

        Ok(json!({
            "location": request.location,
            "page": request.page,
            "sort_by": request.sort_by,
            "count": count,
            "total_results": total,
            "properties": properties,
        }))
    }

    /// Fetches one Zillow property.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn get_property_details(
        &self,
        request: &PropertyDetailsRequest,
    ) -> SwitchyardResult<Value> {
        let params = Params::new().with("zpid", request.zpid.as_str());

        let data = self.get(PROPERTY_DETAILS_URL, params).await?;
        let property = data.get("data").cloned().unwrap_or(data);
        Ok(json!({
            "zpid": request.zpid,
            "property": property,
        }))
    }
}
