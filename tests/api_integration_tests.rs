//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dns_cache::{api::create_router, AppState, SharedCache};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(capacity: usize) -> Router {
    let cache = SharedCache::with_capacity(capacity).unwrap();
    create_router(AppState::new(cache))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn put_record(name: &str, record: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/records")
        .header("content-type", "application/json")
        .body(Body::from(format!(
            r#"{{"name":"{}","record":"{}"}}"#,
            name, record
        )))
        .unwrap()
}

fn resolve(name: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/resolve/{}", name))
        .body(Body::empty())
        .unwrap()
}

// == Update Endpoint Tests ==

#[tokio::test]
async fn test_update_endpoint_success() {
    let app = create_test_app(100);

    let response = app
        .oneshot(put_record("example.com", "93.184.216.34"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("message").is_some());
    assert!(json["message"].as_str().unwrap().contains("example.com"));
}

#[tokio::test]
async fn test_update_endpoint_empty_name_rejected() {
    let app = create_test_app(100);

    let response = app.oneshot(put_record("", "10.0.0.1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_update_endpoint_empty_record_rejected() {
    let app = create_test_app(100);

    let response = app.oneshot(put_record("example.com", "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Resolve Endpoint Tests ==

#[tokio::test]
async fn test_resolve_endpoint_roundtrip() {
    let app = create_test_app(100);

    app.clone()
        .oneshot(put_record("example.com", "93.184.216.34"))
        .await
        .unwrap();

    let response = app.oneshot(resolve("example.com")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], "example.com");
    assert_eq!(json["record"], "93.184.216.34");
}

#[tokio::test]
async fn test_resolve_endpoint_not_found() {
    let app = create_test_app(100);

    let response = app.oneshot(resolve("nonexistent.com")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_resolve_endpoint_overwritten_record() {
    let app = create_test_app(100);

    app.clone()
        .oneshot(put_record("example.com", "10.0.0.1"))
        .await
        .unwrap();
    app.clone()
        .oneshot(put_record("example.com", "10.0.0.2"))
        .await
        .unwrap();

    let response = app.oneshot(resolve("example.com")).await.unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["record"], "10.0.0.2");
}

// == Eviction Walkthrough ==

#[tokio::test]
async fn test_eviction_over_http() {
    // Capacity 4: after a fifth insert the first-written name is gone
    let app = create_test_app(4);

    for (name, record) in [
        ("a.com", "10.0.0.1"),
        ("b.com", "10.0.0.2"),
        ("c.com", "10.0.0.3"),
        ("d.com", "10.0.0.4"),
    ] {
        let response = app.clone().oneshot(put_record(name, record)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // All four resolve
    for name in ["a.com", "b.com", "c.com", "d.com"] {
        let response = app.clone().oneshot(resolve(name)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // The fifth insert evicts a.com
    app.clone()
        .oneshot(put_record("e.com", "10.0.0.5"))
        .await
        .unwrap();

    let response = app.clone().oneshot(resolve("a.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for name in ["b.com", "c.com", "d.com", "e.com"] {
        let response = app.clone().oneshot(resolve(name)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{} should resolve", name);
    }
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_reflects_operations() {
    let app = create_test_app(100);

    app.clone()
        .oneshot(put_record("example.com", "10.0.0.1"))
        .await
        .unwrap();
    app.clone().oneshot(resolve("example.com")).await.unwrap(); // hit
    app.clone().oneshot(resolve("missing.com")).await.unwrap(); // miss

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["insertions"], 1);
    assert_eq!(json["entries"], 1);
    assert_eq!(json["capacity"], 100);
}

// == Clear Endpoint Tests ==

#[tokio::test]
async fn test_clear_endpoint_empties_cache() {
    let app = create_test_app(100);

    app.clone()
        .oneshot(put_record("a.com", "10.0.0.1"))
        .await
        .unwrap();
    app.clone()
        .oneshot(put_record("b.com", "10.0.0.2"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/records")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["removed"], 2);

    // Previously present names now miss
    let response = app.clone().oneshot(resolve("a.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The cache remains usable
    let response = app
        .clone()
        .oneshot(put_record("c.com", "10.0.0.3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(resolve("c.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(100);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
