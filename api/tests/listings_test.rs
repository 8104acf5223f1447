mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_company, create_listing, send, test_app};

#[tokio::test]
async fn test_new_listing_is_pending_and_hidden() {
    let app = test_app().await;
    let company = create_company(&app, "담수기술").await;
    let id = create_listing(&app, company).await;

    let (_, body) = send(&app, "GET", "/api/listings", None).await;
    assert_eq!(body["data"], json!([]));

    let (_, body) = send(&app, "GET", "/api/listings?status=pending", None).await;
    assert_eq!(body["data"][0]["id"], id);
    assert_eq!(body["data"][0]["views"], 0);
    assert_eq!(body["data"][0]["company_name"], "담수기술");
    assert_eq!(body["data"][0]["company_country"], "KR");
}

#[tokio::test]
async fn test_listing_views_increment_by_one() {
    let app = test_app().await;
    let company = create_company(&app, "조회수").await;
    let id = create_listing(&app, company).await;
    let uri = format!("/api/listings/{}", id);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["views"], 1);
    assert_eq!(body["data"]["company"]["email"], "contact@example.com");

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["data"]["views"], 2);

    let (_, body) = send(&app, "GET", &format!("{}?lang=en", uri), None).await;
    assert_eq!(body["data"]["views"], 3);
    assert_eq!(
        body["data"]["display_title"],
        "Seawater RO desalination technology for sale"
    );
}

#[tokio::test]
async fn test_missing_listing_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api/listings/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, body) = send(&app, "GET", "/api/listings/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_listing_type_is_validated() {
    let app = test_app().await;
    let company = create_company(&app, "유형검증").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/listings",
        Some(json!({
            "company_id": company,
            "listing_type": "franchise",
            "title": "잘못된 유형",
            "description": "-",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid listing_type: franchise");

    let (status, _) = send(&app, "GET", "/api/listings?type=franchise", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_status_patch() {
    let app = test_app().await;
    let company = create_company(&app, "상태변경").await;
    let id = create_listing(&app, company).await;
    let uri = format!("/api/admin/listings/{}/status", id);

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "status": "approved" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/admin/listings/777/status",
        Some(json!({ "status": "active" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "status": "active" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/listings?type=tech_sale", None).await;
    assert_eq!(body["data"][0]["id"], id);
    assert_eq!(body["data"][0]["status"], "active");
}
