use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use crate::state::test_helpers::test_app_state;

async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================
// JSON API
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = get_body(api_routes(test_app_state()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn api_passport_serves_sample_for_any_id() {
    let (status, body) = get_body(api_routes(test_app_state()), "/api/passports/XYZ").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["id"], "0Xf4r...G937");
    assert_eq!(json["weight"], "175 kg");
    assert_eq!(json["requiredInfo"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["chainOfCustody"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn api_contract_reports_placeholder() {
    let (status, body) = get_body(api_routes(test_app_state()), "/api/contract").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["deployed"], false);
    assert_eq!(json["address"], passport::contract::PLACEHOLDER_CONTRACT_ADDRESS);
}

#[tokio::test]
async fn api_allows_cross_origin_requests() {
    let request = Request::builder()
        .uri("/healthz")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = api_routes(test_app_state()).oneshot(request).await.unwrap();
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.to_str().unwrap()), Some("*"));
}

// =============================================================
// Leptos pages
// =============================================================

#[tokio::test]
async fn passport_page_renders_sample_for_any_id() {
    let router = app(test_app_state()).unwrap();
    let (status, body) = get_body(router, "/battery-passport/XYZ").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("0Xf4r...G937"));
    assert!(!body.contains("XYZ"));
    assert_eq!(body.matches(r#"class="info-field""#).count(), 14);
    assert_eq!(body.matches(r#"class="timeline__entry""#).count(), 4);
}

#[tokio::test]
async fn home_page_renders_landing_and_chrome() {
    let router = app(test_app_state()).unwrap();
    let (status, body) = get_body(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Connect Wallet"));
    assert!(body.contains("Marklytics. All Rights Reserved."));
}
