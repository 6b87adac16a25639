//! Cross-cutting server behaviour: health, request IDs, fallback, shutdown.

use std::time::Duration;

use reqwest::StatusCode;

mod common;

use common::{message, start_server};

#[tokio::test]
async fn test_health_reports_collection_sizes() {
    let server = start_server().await;

    let (status, body) = server.get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["paintings"], 9);
    assert_eq!(body["artists"], 7);
    assert_eq!(body["galleries"], 7);
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let server = start_server().await;

    let res = server.client.get(server.url("/api/artists")).send().await.unwrap();
    let generated = res
        .headers()
        .get("x-request-id")
        .expect("response without x-request-id")
        .to_str()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&generated).is_ok());

    let res = server
        .client
        .get(server.url("/api/painting/999"))
        .header("x-request-id", "trace-me-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()["x-request-id"], "trace-me-42");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = start_server().await;

    let (status, body) = server.get_json("/api/sculptures").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "Route not found: /api/sculptures");
}

#[tokio::test]
async fn test_errors_are_json() {
    let server = start_server().await;

    let res = server
        .client
        .get(server.url("/api/painting/year/early/late"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn test_undecodable_segment_is_json_400() {
    let server = start_server().await;

    let res = server
        .client
        .get(server.url("/api/painting/title/%FF"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));

    let body: serde_json::Value = res.json().await.unwrap();
    assert!(message(&body).contains("UTF-8"));

    let (status, body) = server.get_json("/api/artists/%C3%28").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!message(&body).is_empty());
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let server = start_server().await;

    let (status, _) = server.get_json("/health").await;
    assert_eq!(status, StatusCode::OK);

    server.stop();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let fresh = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    assert!(fresh.get(server.url("/health")).send().await.is_err());
}
