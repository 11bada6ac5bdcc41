//! Tests for the Last.fm client against an in-process echo server.

use axum::{
    Form, Json, Router,
    extract::Query,
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use switchyard_core::{Params, WireParams};
use switchyard_error::SwitchyardErrorKind;
use switchyard_lastfm::{CallKind, Credentials, LastfmClient, find_method, sign};

/// Spawns a server that echoes GET queries and POST forms back as JSON.
async fn spawn_echo_server(hits: Arc<AtomicUsize>) -> String {
    let get_hits = hits.clone();
    let post_hits = hits;
    let app = Router::new()
        .route(
            "/2.0/",
            get(move |Query(query): Query<HashMap<String, String>>| {
                let hits = get_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "http_method": "GET", "params": query }))
                }
            })
            .post(move |Form(form): Form<HashMap<String, String>>| {
                let hits = post_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "http_method": "POST", "params": form }))
                }
            }),
        )
        .route(
            "/down/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base: &str, path: &str, secret: Option<&str>, sk: Option<&str>) -> LastfmClient {
    let credentials = Credentials::new(
        "test-key",
        secret.map(str::to_string),
        sk.map(str::to_string),
    )
    .unwrap();
    LastfmClient::builder()
        .credentials(credentials)
        .base_url(format!("{}{}", base, path))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_read_call_sends_unsigned_query() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_echo_server(hits.clone()).await;
    let client = client(&base, "/2.0/", None, None);

    let body = client
        .call(
            "artist.getinfo",
            Params::new().with("artist", "Cher").with("format", "xml"),
            CallKind::Read,
        )
        .await
        .unwrap();

    assert_eq!(body["http_method"], "GET");
    let params = &body["params"];
    assert_eq!(params["artist"], "Cher");
    assert_eq!(params["api_key"], "test-key");
    assert_eq!(params["format"], "json");
    assert_eq!(params["method"], "artist.getinfo");
    assert!(params.get("api_sig").is_none());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_write_call_posts_signed_form() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_echo_server(hits.clone()).await;
    let client = client(&base, "/2.0/", Some("secret"), Some("STORED"));

    let body = client
        .call(
            "track.love",
            Params::new().with("artist", "Cher").with("track", "Believe"),
            CallKind::Write,
        )
        .await
        .unwrap();

    assert_eq!(body["http_method"], "POST");
    let echoed: BTreeMap<String, String> =
        serde_json::from_value(body["params"].clone()).unwrap();
    assert_eq!(echoed["sk"], "STORED");

    let mut unsigned = WireParams::default();
    for (name, value) in echoed.iter().filter(|(name, _)| name.as_str() != "api_sig") {
        unsigned.insert(name.clone(), value.clone());
    }
    assert_eq!(echoed["api_sig"], sign(&unsigned, "secret"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_write_without_session_key_sends_nothing() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_echo_server(hits.clone()).await;
    let client = client(&base, "/2.0/", Some("secret"), None);

    let err = client
        .call(
            "track.love",
            Params::new().with("artist", "Cher").with("track", "Believe"),
            CallKind::Write,
        )
        .await
        .unwrap_err();

    assert!(err.is_auth());
    assert!(err.to_string().contains("session key required"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_write_without_secret_sends_nothing() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_echo_server(hits.clone()).await;
    let client = client(&base, "/2.0/", None, Some("STORED"));

    let err = client
        .call("track.love", Params::new(), CallKind::Write)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("secret required for signing"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let base = spawn_echo_server(Arc::new(AtomicUsize::new(0))).await;
    let client = client(&base, "/down/", None, None);

    let err = client
        .call("chart.gettopartists", Params::new(), CallKind::Read)
        .await
        .unwrap_err();

    let http = err.as_http().expect("http error");
    assert_eq!(http.status_code(), Some(503));
    assert!(http.to_string().contains("Service Unavailable"));
}

#[tokio::test]
async fn test_call_spec_converts_tool_arguments() {
    let base = spawn_echo_server(Arc::new(AtomicUsize::new(0))).await;
    let client = client(&base, "/2.0/", None, None);
    let spec = find_method("user_get_friends").unwrap();

    let body = client
        .call_spec(spec, &json!({ "user": "rj", "recent_tracks": true, "limit": 5 }))
        .await
        .unwrap();

    let params = &body["params"];
    assert_eq!(params["method"], "user.getfriends");
    assert_eq!(params["recenttracks"], "1");
    assert_eq!(params["limit"], "5");
}

#[tokio::test]
async fn test_call_spec_missing_argument_is_input_error() {
    let base = spawn_echo_server(Arc::new(AtomicUsize::new(0))).await;
    let client = client(&base, "/2.0/", None, None);
    let spec = find_method("geo_get_top_artists").unwrap();

    let err = client.call_spec(spec, &Value::Null).await.unwrap_err();
    assert!(matches!(err.kind(), SwitchyardErrorKind::Input(_)));
}
