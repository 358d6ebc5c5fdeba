//! API Integration Tests
//!
//! These tests verify the complete API functionality by driving the
//! router directly with tower's `oneshot`.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

use centreboard::directory::CentreDirectory;
use centreboard::server::build_router;
use centreboard::AppState;
use centreboard_shared::{CentreDetail, CentreSummary, DayHours};

// Test utilities

fn app_with(directory: CentreDirectory) -> Router {
    build_router(Arc::new(AppState {
        directory: Arc::new(directory),
    }))
}

fn app() -> Router {
    app_with(CentreDirectory::builtin())
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// =============================================================================
// Centre list
// =============================================================================

#[tokio::test]
async fn test_list_centres_fixed_order() {
    let response = get(app(), "/api/v1/centres").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_response(response).await;
    let centres = json.as_array().unwrap();
    assert_eq!(centres.len(), 3);
    assert_eq!(centres[0]["slug"], "auckland-central");
    assert_eq!(centres[0]["name"], "Auckland Central");
    assert_eq!(centres[1]["slug"], "wellington-hub");
    assert_eq!(centres[2]["slug"], "christchurch-centre");
}

#[tokio::test]
async fn test_list_centres_is_idempotent() {
    let first = json_response(get(app(), "/api/v1/centres").await).await;
    let second = json_response(get(app(), "/api/v1/centres").await).await;
    assert_eq!(first, second);
}

// =============================================================================
// Centre detail
// =============================================================================

#[tokio::test]
async fn test_get_centre_detail() {
    let response = get(app(), "/api/v1/centre/auckland-central").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_response(response).await;
    assert_eq!(json["name"], "Auckland Central Collection Centre");
    assert_eq!(json["address"], "123 Queen Street");
    assert_eq!(json["city"], "Auckland");
    assert_eq!(json["phone"], "09-123-4567");
    assert_eq!(json["map_link"], "https://maps.google.com");

    let hours = json["hours"].as_array().unwrap();
    assert_eq!(hours.len(), 7);
    assert_eq!(hours[0]["day"], "Monday");
    assert_eq!(hours[6]["day"], "Sunday");
    assert_eq!(hours[5]["hours"], "Closed");
    assert_eq!(hours[6]["hours"], "Closed");
}

#[tokio::test]
async fn test_unknown_slug_returns_structured_404() {
    let response = get(app(), "/api/v1/centre/nonexistent-slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_response(response).await;
    assert_eq!(json["code"], "centre_not_found");
    assert_eq!(json["status"], 404);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("nonexistent-slug"));
}

#[tokio::test]
async fn test_summary_only_slug_returns_same_404() {
    // wellington-hub is listed but has no detail record; that must
    // fail exactly like an unknown slug
    let response = get(app(), "/api/v1/centre/wellington-hub").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_response(response).await;
    assert_eq!(json["code"], "centre_not_found");
}

#[tokio::test]
async fn test_malformed_slug_is_a_routing_miss() {
    // Underscores and spaces fall outside [a-zA-Z0-9-]+: plain 404,
    // never the structured error body
    for uri in ["/api/v1/centre/auckland_central", "/api/v1/centre/a%20b"] {
        let response = get(app(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(serde_json::from_slice::<Value>(&body).is_err());
    }
}

#[tokio::test]
async fn test_detail_lookup_has_no_side_effects() {
    let app = app();
    let miss = get(app.clone(), "/api/v1/centre/nonexistent-slug").await;
    assert_eq!(miss.status(), StatusCode::NOT_FOUND);

    // A failed lookup must not disturb subsequent reads
    let list = get(app, "/api/v1/centres").await;
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(json_response(list).await.as_array().unwrap().len(), 3);
}

// =============================================================================
// Injected fixtures
// =============================================================================

#[tokio::test]
async fn test_fixture_directory_is_served_verbatim() {
    let summaries = vec![CentreSummary {
        name: "Test Centre".to_string(),
        slug: "test-centre".to_string(),
    }];
    let mut details = HashMap::new();
    details.insert(
        "test-centre".to_string(),
        CentreDetail {
            name: "Test Centre".to_string(),
            address: "1 Test Lane".to_string(),
            city: "Testville".to_string(),
            phone: String::new(),
            hours: vec![
                DayHours {
                    day: "Monday".to_string(),
                    hours: "Closed".to_string()
                };
                7
            ],
            map_link: String::new(),
        },
    );

    let app = app_with(CentreDirectory::new(summaries, details));

    let response = get(app.clone(), "/api/v1/centres").await;
    let json = json_response(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/centre/test-centre").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_response(response).await;
    // Empty phone is served as-is; presentation policy is the client's
    assert_eq!(json["phone"], "");
}

// =============================================================================
// Server scaffolding
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let response = get(app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_api_info() {
    let response = get(app(), "/api/info").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_response(response).await;
    assert_eq!(json["centre_count"], 3);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_centres_rejects_post() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/centres")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
