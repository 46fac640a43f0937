//! Integration tests for the non-CRUD endpoints
//!
//! - /health (liveness)
//! - /health/db (database ping)
//! - /metrics
//! - / (browser UI)

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body, read_body_json};
use serde_json::Value;

#[actix_web::test]
async fn test_health_endpoint_returns_200_ok() {
    let (service, _db) = lighter_users::service!();

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_health_db_reports_connected() {
    let (service, _db) = lighter_users::service!();

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[actix_web::test]
async fn test_health_db_after_pool_closed() {
    let (service, db) = lighter_users::service!();

    db.close().await;

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["database"], "disconnected");
}

#[actix_web::test]
async fn test_list_after_pool_closed_is_internal_error() {
    let (service, db) = lighter_users::service!();

    db.close().await;

    let req = TestRequest::get().uri("/api/users").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Failed to fetch users");
}

#[actix_web::test]
async fn test_metrics_endpoint_counts_queries() {
    let (service, _db) = lighter_users::service!();

    let req = TestRequest::get().uri("/api/users").to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/metrics").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("database_queries_total"));
}

#[actix_web::test]
async fn test_index_serves_ui() {
    let (service, _db) = lighter_users::service!();

    let req = TestRequest::get().uri("/").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("/api/users"));
}
