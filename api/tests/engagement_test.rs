mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_company, send, send_with_headers, test_app};

#[tokio::test]
async fn test_health_pings_database() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_consultation_flow() {
    let app = test_app().await;
    let company = create_company(&app, "상담대상").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/consultations",
        Some(json!({
            "company_id": company,
            "requester_name": "Nguyen Van A",
            "requester_email": "buyer@example.vn",
            "message": "RO 설비 견적 요청",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = send(&app, "GET", "/api/admin/consultations?status=pending", None).await;
    assert_eq!(body["data"][0]["id"], id);
    assert_eq!(body["data"][0]["status"], "pending");

    let uri = format!("/api/admin/consultations/{}/status", id);
    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "status": "done" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "status": "responded" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/admin/consultations?status=pending", None).await;
    assert_eq!(body["data"], json!([]));

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/admin/consultations/999/status",
        Some(json!({ "status": "closed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_consultation_for_unknown_company() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/consultations",
        Some(json!({
            "company_id": 31337,
            "requester_name": "Bat-Erdene",
            "requester_email": "buyer@example.mn",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analytics_event_recorded() {
    let app = test_app().await;

    let (status, body) = send_with_headers(
        &app,
        "POST",
        "/api/analytics",
        &[
            ("user-agent", "Mozilla/5.0"),
            ("x-forwarded-for", "198.51.100.4, 10.0.0.1"),
        ],
        json!({
            "session_id": "sess-42",
            "event_type": "page_view",
            "event_data": { "path": "/listings/1" },
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["id"].as_i64().is_some());

    let (status, _) = send(
        &app,
        "POST",
        "/api/analytics",
        Some(json!({ "event_type": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
