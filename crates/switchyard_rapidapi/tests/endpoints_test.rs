//! Tests for RapidAPI bindings against an in-process upstream.

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, Uri},
    routing::{any, get, post},
};
use serde_json::{Value, json};
use std::collections::HashMap;
use switchyard_rapidapi::{
    BusinessSearchRequestBuilder, Endpoint, NewsSearchRequestBuilder, PriceRequestBuilder,
    RapidApiClient, RecipeSearchRequestBuilder, RentalSearchRequestBuilder,
    SteamReviewsRequestBuilder, UserTweetsRequestBuilder,
};

/// Echoes path, query and RapidAPI headers, wrapped the way the news API
/// wraps its results.
async fn echo(uri: Uri, headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    Json(json!({
        "status": "OK",
        "request_id": "req-1",
        "data": [{
            "path": uri.path(),
            "query": query,
            "key": header("x-rapidapi-key"),
            "host": header("x-rapidapi-host"),
            "sub_articles": [{ "title": "nested" }]
        }]
    }))
}

async fn recipes() -> Json<Value> {
    Json(json!({
        "count": 123,
        "results": [{
            "id": 1,
            "name": "Pancakes",
            "num_servings": 2,
            "tags": [{ "name": "breakfast" }],
            "instructions": [{ "display_text": "Mix." }, { "display_text": "Fry." }],
            "sections": [{ "components": [{ "raw_text": "2 eggs" }] }]
        }]
    }))
}

/// Same echo, wrapped the way the Twitter API wraps its results.
async fn results_echo(
    uri: Uri,
    headers: HeaderMap,
    query: Query<HashMap<String, String>>,
) -> Json<Value> {
    let Json(echoed) = echo(uri, headers, query).await;
    Json(json!({ "results": echoed["data"] }))
}

async fn rentals(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!({
        "props": [{ "body": body, "content_type": content_type }],
        "totalResultCount": 7
    }))
}

async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/recipes/list", get(recipes))
        .route("/user/tweets", get(results_echo))
        .route("/v2/properties/search-for-rent", post(rentals))
        .route(
            "/broken",
            any(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
        )
        .fallback(echo);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client() -> RapidApiClient {
    RapidApiClient::new("test-key")
        .unwrap()
        .with_upstream(spawn_upstream().await)
}

#[tokio::test]
async fn test_headers_keep_original_host() {
    let client = client().await;
    let request = NewsSearchRequestBuilder::default()
        .query("rust")
        .build()
        .unwrap();

    let result = client.search_news(&request).await.unwrap();
    let article = &result["articles"][0];
    assert_eq!(article["key"], "test-key");
    assert_eq!(article["host"], "real-time-news-data.p.rapidapi.com");
    assert_eq!(article["path"], "/search");
    assert_eq!(article["query"]["query"], "rust");
    assert_eq!(article["query"]["limit"], "10");
    assert!(article.get("sub_articles").is_none());
    assert_eq!(result["count"], 1);
    assert_eq!(result["query"], "rust");
}

#[tokio::test]
async fn test_absent_values_are_dropped_and_booleans_rendered() {
    let client = client().await;
    let request = BusinessSearchRequestBuilder::default()
        .query("coffee")
        .limit(500u32)
        .verified(true)
        .build()
        .unwrap();

    let result = client.local_business_search(&request).await.unwrap();
    let query = &result["businesses"][0]["query"];
    assert_eq!(query["limit"], "50");
    assert_eq!(query["verified"], "true");
    assert_eq!(query["extract_emails_and_contacts"], "false");
    assert!(query.get("lat").is_none());
    assert!(query.get("subtypes").is_none());
}

#[tokio::test]
async fn test_price_symbol_is_uppercased() {
    let client = client().await;
    let request = PriceRequestBuilder::default()
        .symbol("aapl")
        .build()
        .unwrap();

    let result = client.get_twelve_data_price(&request).await.unwrap();
    assert_eq!(result["symbol"], "AAPL");
    assert_eq!(result["data"]["data"][0]["query"]["symbol"], "AAPL");
    assert_eq!(result["data"]["data"][0]["host"], "twelve-data1.p.rapidapi.com");
}

#[tokio::test]
async fn test_recipes_are_projected() {
    let client = client().await;
    let request = RecipeSearchRequestBuilder::default()
        .query("pancakes")
        .size(100u32)
        .build()
        .unwrap();

    let result = client.search_recipes(&request).await.unwrap();
    assert_eq!(result["size"], 40);
    assert_eq!(result["count"], 1);
    assert_eq!(result["total_count"], 123);
    let recipe = &result["recipes"][0];
    assert_eq!(recipe["servings"], 2);
    assert_eq!(recipe["tags"], json!(["breakfast"]));
    assert_eq!(recipe["instructions"], json!(["Mix.", "Fry."]));
    assert_eq!(recipe["ingredients"], json!(["2 eggs"]));
}

#[tokio::test]
async fn test_steam_path_segments_are_encoded() {
    let client = client().await;

    let result = Endpoint::SteamSearchGames
        .invoke(&client, json!({ "term": "half life", "page": 2 }))
        .await
        .unwrap();
    let echoed = &result["results"]["data"][0];
    assert_eq!(echoed["path"], "/search/half%20life/page/2");
    assert_eq!(echoed["host"], "steam2.p.rapidapi.com");
    assert_eq!(result["term"], "half life");

    let request = SteamReviewsRequestBuilder::default()
        .app_id("620")
        .limit(1000u32)
        .cursor("abc")
        .build()
        .unwrap();
    let result = client.steam_get_app_reviews(&request).await.unwrap();
    assert_eq!(result["limit"], 200);
    let echoed = &result["reviews"]["data"][0];
    assert_eq!(echoed["path"], "/appReviews/620/limit/200/*");
    assert_eq!(echoed["query"]["cursor"], "abc");
}

#[tokio::test]
async fn test_rental_search_posts_json_body() {
    let client = client().await;
    let request = RentalSearchRequestBuilder::default()
        .location("Austin, TX")
        .bedrooms(json!({ "min": 2 }))
        .build()
        .unwrap();

    let result = client.search_rental_properties(&request).await.unwrap();
    assert_eq!(result["count"], 1);
    assert_eq!(result["total_results"], 7);
    let listing = &result["properties"][0];
    assert_eq!(listing["content_type"], "application/json");
    assert_eq!(
        listing["body"],
        json!({
            "location": "Austin, TX",
            "page": 1,
            "sortBy": "relevance",
            "bedrooms": { "min": 2 }
        })
    );
}

#[tokio::test]
async fn test_user_tweets_cap_and_flags() {
    let client = client().await;
    let request = UserTweetsRequestBuilder::default()
        .username("rustlang")
        .limit(500u32)
        .include_replies(true)
        .build()
        .unwrap();

    let result = client.get_user_tweets(&request).await.unwrap();
    assert_eq!(result["count"], 1);
    assert_eq!(result["params"]["limit"], 100);
    let query = &result["tweets"][0]["query"];
    assert_eq!(query["limit"], "100");
    assert_eq!(query["include_replies"], "true");
    assert_eq!(query["include_pinned"], "false");
    assert!(query.get("user_id").is_none());
    assert_eq!(result["tweets"][0]["host"], "twitter154.p.rapidapi.com");
}

#[tokio::test]
async fn test_spotify_artist_albums_counts_items() {
    let client = client().await;

    let result = Endpoint::GetSpotifyArtistAlbums
        .invoke(&client, json!({ "artist_id": "abc" }))
        .await
        .unwrap();
    assert_eq!(result["id"], "abc");
    assert_eq!(result["count"], 1);
    assert_eq!(result["total_count"], 1);
    assert_eq!(result["albums"][0]["query"]["limit"], "100");
    assert_eq!(result["albums"][0]["path"], "/artist_albums/");
}

#[tokio::test]
async fn test_endpoint_invoke_with_tool_arguments() {
    let client = client().await;

    let result = Endpoint::SearchJobs
        .invoke(&client, json!({ "query": "rust developer", "work_from_home": true }))
        .await
        .unwrap();

    assert_eq!(result["status"], "OK");
    assert_eq!(result["request_id"], "req-1");
    assert_eq!(result["page"], 1);
    let echoed = &result["results"][0];
    assert_eq!(echoed["host"], "jsearch.p.rapidapi.com");
    assert_eq!(echoed["query"]["work_from_home"], "true");
    assert_eq!(echoed["query"]["date_posted"], "all");
}

#[tokio::test]
async fn test_endpoint_invoke_rejects_bad_arguments() {
    let client = client().await;
    let err = Endpoint::GetJobDetails
        .invoke(&client, json!({ "country": "de" }))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("job_id"));
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let client = RapidApiClient::new("test-key").unwrap();
    let base = spawn_upstream().await;

    let err = client
        .get(&format!("{}/broken", base), Default::default())
        .await
        .unwrap_err();
    let http = err.as_http().expect("http error");
    assert_eq!(http.status_code(), Some(429));
}
