//! Integration tests for the KPI API endpoint.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use seva_core::{JsonFileKpiProvider, KpiSnapshot, SimulatedKpiProvider};
use seva_server::routes::create_router;
use seva_server::{AppState, LandingMode};

/// Router over the simulated provider.
fn create_test_app() -> Router {
    let state = AppState::new(Arc::new(SimulatedKpiProvider), LandingMode::Offering);
    create_router(Arc::new(state), std::env::temp_dir())
}

/// Router over a snapshot file.
fn create_file_app(path: &std::path::Path) -> Router {
    let state = AppState::new(Arc::new(JsonFileKpiProvider::new(path)), LandingMode::Offering);
    create_router(Arc::new(state), std::env::temp_dir())
}

async fn send(app: Router, method: Method, body: Body) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri("/api/kpi/latest")
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

fn assert_cors(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

// =============================================================================
// GET
// =============================================================================

#[tokio::test]
async fn test_get_returns_envelope() {
    let (status, headers, body) = send(create_test_app(), Method::GET, Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);

    let json = json_body(&body);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["bond"]["notional"], 7_000_000_000u64);
    assert_eq!(json["data"]["impact"]["dalys"]["formatted"], "2.24M");
    assert_eq!(json["data"]["metadata"]["isin"], "SEVA-SDG-26");
    assert_eq!(json["meta"]["version"], "1.0.0");
}

#[tokio::test]
async fn test_get_fresh_snapshot_is_not_stale() {
    let (_, _, body) = send(create_test_app(), Method::GET, Body::empty()).await;
    let json = json_body(&body);

    assert_eq!(json["meta"]["dataAge"], 0);
    assert_eq!(json["meta"]["isStale"], false);

    let generated = seva_core::timestamp::parse_iso(json["meta"]["generatedAt"].as_str().unwrap())
        .unwrap();
    let stamped =
        seva_core::timestamp::parse_iso(json["data"]["timestamp"].as_str().unwrap()).unwrap();
    assert!(generated >= stamped);
}

#[tokio::test]
async fn test_get_allocation_percent_matches_amounts() {
    let (_, _, body) = send(create_test_app(), Method::GET, Body::empty()).await;
    let json = json_body(&body);
    let bond = &json["data"]["bond"];

    let notional = bond["notional"].as_u64().unwrap();
    let allocated = bond["allocated"].as_u64().unwrap();
    let stated = bond["allocationPercent"].as_f64().unwrap();
    let computed = allocated as f64 / notional as f64 * 100.0;

    assert!(
        (stated - computed).abs() < 0.005,
        "allocationPercent {} does not match allocated/notional {:.4}",
        stated,
        computed
    );
}

#[tokio::test]
async fn test_get_body_decodes_as_snapshot() {
    let (_, _, body) = send(create_test_app(), Method::GET, Body::empty()).await;
    let json = json_body(&body);

    let snapshot: KpiSnapshot = serde_json::from_value(json["data"].clone()).unwrap();
    assert!(seva_core::audit(&snapshot).is_empty());
    assert_eq!(snapshot.compliance.current_allocation, Decimal::new(6986, 2));
}

// =============================================================================
// PRE-FLIGHT AND METHOD RULES
// =============================================================================

#[tokio::test]
async fn test_options_is_empty_ok() {
    let (status, headers, body) = send(create_test_app(), Method::OPTIONS, Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_other_methods_are_rejected_regardless_of_payload() {
    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let payload = Body::from(r#"{"bond": {"notional": 1}}"#);
        let (status, headers, body) = send(create_test_app(), method.clone(), payload).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {}", method);
        assert_cors(&headers);
        assert_eq!(json_body(&body)["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn test_head_is_rejected() {
    let (status, headers, _) = send(create_test_app(), Method::HEAD, Body::empty()).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_cors(&headers);
}

// =============================================================================
// FILE-BACKED SNAPSHOTS
// =============================================================================

#[tokio::test]
async fn test_file_snapshot_age_and_staleness() {
    let stamped = Utc::now() - Duration::days(40);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        serde_json::to_string(&KpiSnapshot::simulated(stamped))
            .unwrap()
            .as_bytes(),
    )
    .unwrap();

    let (status, _, body) = send(create_file_app(file.path()), Method::GET, Body::empty()).await;
    let json = json_body(&body);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["meta"]["dataAge"], 40);
    assert_eq!(json["meta"]["isStale"], true);
}

#[tokio::test]
async fn test_file_snapshot_within_threshold_is_fresh() {
    let stamped = Utc::now() - Duration::days(35);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        serde_json::to_string(&KpiSnapshot::simulated(stamped))
            .unwrap()
            .as_bytes(),
    )
    .unwrap();

    let (_, _, body) = send(create_file_app(file.path()), Method::GET, Body::empty()).await;
    let json = json_body(&body);

    assert_eq!(json["meta"]["dataAge"], 35);
    assert_eq!(json["meta"]["isStale"], false);
}

#[tokio::test]
async fn test_provider_failure_returns_error_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_file_app(&dir.path().join("missing.json"));

    let (status, headers, body) = send(app, Method::GET, Body::empty()).await;
    let json = json_body(&body);

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&headers);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to fetch KPI data");
    assert!(json["message"].as_str().unwrap().contains("missing.json"));
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = json_body(&body);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
