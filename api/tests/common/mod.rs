// Shared harness: the real router over a migrated in-memory SQLite database
#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{json, Value};
use tower::ServiceExt;

use techfinder_api::db::DbPool;
use techfinder_api::domain::image_analysis::StubImageAnalyzer;
use techfinder_api::handlers::ApiState;
use techfinder_api::routes::create_router;

pub async fn test_app() -> Router {
    test_app_with_connection().await.0
}

/// Router plus a handle on its database for asserting stored rows
pub async fn test_app_with_connection() -> (Router, DatabaseConnection) {
    // A single connection keeps every query on the same in-memory database
    let options = ConnectOptions::new("sqlite::memory:".to_string())
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();

    let conn = Database::connect(options)
        .await
        .expect("failed to open sqlite database");
    Migrator::up(&conn, None)
        .await
        .expect("failed to apply migrations");

    let pool = DbPool::from_connection(conn.clone());
    let state = Arc::new(ApiState {
        repositories: pool.repositories(),
        analyzer: Arc::new(StubImageAnalyzer),
    });

    (create_router(state), conn)
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");
    dispatch(app, request).await
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    dispatch(app, request).await
}

pub async fn send_with_headers(
    app: &Router,
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
    body: Value,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    dispatch(app, request).await
}

pub fn dec(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).expect("not a decimal string"),
        Value::Number(n) => Decimal::from_str(&n.to_string()).expect("not a decimal number"),
        other => panic!("expected a decimal, got {}", other),
    }
}

pub fn dec_str(s: &str) -> Decimal {
    Decimal::from_str(s).expect("bad decimal literal")
}

pub async fn create_company(app: &Router, name: &str) -> i32 {
    let (status, body) = send(
        app,
        "POST",
        "/api/companies",
        Some(json!({
            "name": name,
            "email": "contact@example.com",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "company create failed: {}", body);
    body["data"]["id"].as_i64().expect("missing id") as i32
}

pub async fn set_company_status(app: &Router, id: i32, status: &str) {
    let (code, body) = send(
        app,
        "PATCH",
        &format!("/api/admin/companies/{}/status", id),
        Some(json!({ "status": status })),
    )
    .await;
    assert_eq!(code, StatusCode::OK, "status update failed: {}", body);
}

pub async fn create_approved_company(app: &Router, name: &str) -> i32 {
    let id = create_company(app, name).await;
    set_company_status(app, id, "approved").await;
    id
}

/// Id of a seeded category by its Korean name
pub async fn category_id(app: &Router, name: &str) -> i32 {
    let (_, body) = send(app, "GET", "/api/categories", None).await;
    body["data"]
        .as_array()
        .expect("categories array")
        .iter()
        .find(|c| c["name"] == name)
        .and_then(|c| c["id"].as_i64())
        .unwrap_or_else(|| panic!("category {} not seeded", name)) as i32
}

pub async fn add_technology(app: &Router, company_id: i32, category_id: Option<i32>, name: &str) {
    let (status, body) = send(
        app,
        "POST",
        &format!("/api/companies/{}/technologies", company_id),
        Some(json!({
            "category_id": category_id,
            "technology_name": name,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "technology create failed: {}", body);
}

pub async fn add_patents(app: &Router, company_id: i32, count: usize) {
    for n in 0..count {
        let (status, _) = send(
            app,
            "POST",
            &format!("/api/companies/{}/patents", company_id),
            Some(json!({ "patent_number": format!("10-{}-{}", company_id, n) })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

pub async fn add_certifications(app: &Router, company_id: i32, count: usize) {
    for n in 0..count {
        let (status, _) = send(
            app,
            "POST",
            &format!("/api/companies/{}/certifications", company_id),
            Some(json!({ "certification_type": format!("ISO-{}", 9001 + n) })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

pub async fn create_listing(app: &Router, company_id: i32) -> i32 {
    let (status, body) = send(
        app,
        "POST",
        "/api/listings",
        Some(json!({
            "company_id": company_id,
            "listing_type": "tech_sale",
            "title": "해수 담수화 RO 설비 기술 매각",
            "title_en": "Seawater RO desalination technology for sale",
            "description": "역삼투압 방식 담수화 설비 일체",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "listing create failed: {}", body);
    body["data"]["id"].as_i64().expect("missing id") as i32
}
