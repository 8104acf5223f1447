mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{category_id, create_company, send, send_raw, test_app};

#[tokio::test]
async fn test_registered_company_starts_pending() {
    let app = test_app().await;
    let id = create_company(&app, "한국수처리").await;

    let (status, body) = send(&app, "GET", &format!("/api/companies/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["country"], "KR");
    assert_eq!(body["data"]["certifications"], json!([]));
}

#[tokio::test]
async fn test_company_detail_includes_profile_records() {
    let app = test_app().await;
    let id = create_company(&app, "대한멤브레인").await;
    let desalination = category_id(&app, "담수화").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/companies/{}/certifications", id),
        Some(json!({
            "certification_type": "ISO 9001",
            "issued_date": "2021-03-15",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    common::add_patents(&app, id, 2).await;
    common::add_technology(&app, id, Some(desalination), "RO 멤브레인 모듈").await;

    let (status, body) = send(&app, "GET", &format!("/api/companies/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["certifications"][0]["certification_type"], "ISO 9001");
    assert_eq!(data["certifications"][0]["issued_date"], "2021-03-15");
    assert_eq!(data["patents"].as_array().map(Vec::len), Some(2));
    assert_eq!(data["technologies"][0]["technology_name"], "RO 멤브레인 모듈");
    assert_eq!(data["technologies"][0]["category_name"], "담수화");
    assert_eq!(data["technologies"][0]["category_name_en"], "Desalination");
}

#[tokio::test]
async fn test_missing_company_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/companies/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("9999"));

    let (status, _) = send(
        &app,
        "POST",
        "/api/companies/9999/patents",
        Some(json!({ "patent_number": "10-0000000" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_company_list_display_name_follows_lang() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/companies",
        Some(json!({
            "name": "해양기술",
            "name_en": "Ocean Tech",
            "email": "info@ocean.example",
            "country": "VN",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", "/api/companies?lang=ja", None).await;
    assert_eq!(body["data"][0]["display_name"], "Ocean Tech");

    let (_, body) = send(&app, "GET", "/api/companies?lang=xx", None).await;
    assert_eq!(body["data"][0]["display_name"], "해양기술");

    let (_, body) = send(&app, "GET", "/api/companies?country=KR", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_company_status_patch() {
    let app = test_app().await;
    let id = create_company(&app, "검토대상").await;
    let uri = format!("/api/admin/companies/{}/status", id);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "status": "active" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid status: active");

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/admin/companies/9999/status",
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "status": "approved" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = send(&app, "GET", "/api/companies?status=approved", None).await;
    assert_eq!(body["data"][0]["id"], id);

    // No ordering between review states
    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "status": "pending" }))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let app = test_app().await;

    let (status, body) = send_raw(&app, "POST", "/api/companies", "{\"name\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "POST", "/api/companies", Some(json!({ "name": "이메일없음" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = send(
        &app,
        "POST",
        "/api/companies",
        Some(json!({ "name": "  ", "email": "a@b.example" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}

#[tokio::test]
async fn test_company_list_rejects_unknown_status() {
    let app = test_app().await;
    create_company(&app, "상태필터").await;

    let (status, body) = send(&app, "GET", "/api/companies?status=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid status: bogus");

    let (status, body) = send(&app, "GET", "/api/companies?status=pending", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_query_uses_error_envelope() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/companies?limit=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "GET", "/api/companies/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_categories_by_level() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/categories?level=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let roots = body["data"].as_array().unwrap();
    assert!(!roots.is_empty());
    assert!(roots.iter().all(|c| c["level"] == 1));
    assert_eq!(roots[0]["name"], "수처리·환경");

    let (_, body) = send(&app, "GET", "/api/categories?level=2", None).await;
    let children = body["data"].as_array().unwrap();
    assert!(children.iter().all(|c| !c["parent_id"].is_null()));
}
