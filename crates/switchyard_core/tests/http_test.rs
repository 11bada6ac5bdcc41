//! Tests for shared HTTP response handling.

use axum::{Router, http::StatusCode, routing::get};
use switchyard_core::{build_http_client, read_json};
use switchyard_error::HttpErrorKind;

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/ok", get(|| async { r#"{"status":"ok"}"# }))
        .route(
            "/down",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route("/garbage", get(|| async { "<html>not json</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_read_json_success() {
    let base = spawn_server().await;
    let client = build_http_client().unwrap();

    let response = client.get(format!("{}/ok", base)).send().await.unwrap();
    let value = read_json(response).await.unwrap();
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn test_read_json_surfaces_status_and_body() {
    let base = spawn_server().await;
    let client = build_http_client().unwrap();

    let response = client.get(format!("{}/down", base)).send().await.unwrap();
    let err = read_json(response).await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    match err.kind {
        HttpErrorKind::Status { body, .. } => assert_eq!(body, "maintenance"),
        other => panic!("unexpected kind: {:?}", other),
    }
}

#[tokio::test]
async fn test_read_json_rejects_non_json_body() {
    let base = spawn_server().await;
    let client = build_http_client().unwrap();

    let response = client.get(format!("{}/garbage", base)).send().await.unwrap();
    let err = read_json(response).await.unwrap_err();
    assert!(matches!(err.kind, HttpErrorKind::Decode(_)));
}
