mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_company, create_listing, dec, dec_str, send, test_app};

#[tokio::test]
async fn test_quote_adds_three_percent() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/transactions/quote",
        Some(json!({ "amount": "100" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(dec(&data["fee_rate"]), dec_str("0.03"));
    assert_eq!(dec(&data["fee"]), dec_str("3"));
    assert_eq!(dec(&data["total"]), dec_str("103"));
    assert_eq!(data["currency"], "USDT");
    assert!(data.get("converted").is_none());

    let (_, body) = send(
        &app,
        "POST",
        "/api/transactions/quote",
        Some(json!({ "amount": "1234.5678" })),
    )
    .await;
    assert_eq!(dec(&body["data"]["fee"]), dec_str("37.037034"));
    assert_eq!(dec(&body["data"]["total"]), dec_str("1271.604834"));
}

#[tokio::test]
async fn test_quote_rejects_bad_amounts() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/transactions/quote",
        Some(json!({ "amount": "-5" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "amount must not be negative");

    let (status, _) = send(
        &app,
        "POST",
        "/api/transactions/quote",
        Some(json!({ "amount": "1.0000001" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oversized_amounts_rejected_with_envelope() {
    let app = test_app().await;

    for amount in ["79228162514264337593543950335", "100000000000000"] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/transactions/quote",
            Some(json!({ "amount": amount })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "quote for {}", amount);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "amount must be less than 100000000000000");

        let (status, body) = send(
            &app,
            "POST",
            "/api/transactions",
            Some(json!({ "from_address": "a", "to_address": "b", "amount": amount })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "transaction for {}", amount);
        assert_eq!(body["success"], false);
    }

    let (_, body) = send(&app, "GET", "/api/transactions", None).await;
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn test_quote_converts_with_stored_rate() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/admin/exchange-rates",
        Some(json!({
            "base_currency": "usdt",
            "quote_currency": "krw",
            "rate": "1350",
            "source": "manual",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        "POST",
        "/api/transactions/quote",
        Some(json!({ "amount": "100", "quote_currency": "KRW" })),
    )
    .await;
    let converted = &body["data"]["converted"];
    assert_eq!(converted["currency"], "KRW");
    assert_eq!(dec(&converted["rate"]), dec_str("1350"));
    assert_eq!(dec(&converted["total"]), dec_str("139050"));

    // Unknown pair: no conversion
    let (_, body) = send(
        &app,
        "POST",
        "/api/transactions/quote",
        Some(json!({ "amount": "100", "quote_currency": "JPY" })),
    )
    .await;
    assert!(body["data"].get("converted").is_none());
}

#[tokio::test]
async fn test_exchange_rate_upsert_replaces_pair() {
    let app = test_app().await;
    let body = |rate: &str| {
        json!({ "base_currency": "USDT", "quote_currency": "VND", "rate": rate })
    };

    let (status, _) = send(&app, "PUT", "/api/admin/exchange-rates", Some(body("25000"))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "PUT", "/api/admin/exchange-rates", Some(body("25500"))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = send(&app, "GET", "/api/exchange-rates?base=usdt", None).await;
    let rates = listed["data"].as_array().unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(dec(&rates[0]["rate"]), dec_str("25500"));

    let (status, _) = send(&app, "PUT", "/api/admin/exchange-rates", Some(body("0"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

async fn open_transaction(app: &axum::Router, amount: &str) -> serde_json::Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/transactions",
        Some(json!({
            "from_address": "TBuyerAddress111",
            "to_address": "TSellerAddress222",
            "amount": amount,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "transaction create failed: {}", body);
    body["data"].clone()
}

#[tokio::test]
async fn test_transaction_creates_one_fee_row() {
    let app = test_app().await;
    let created = open_transaction(&app, "250").await;

    assert_eq!(created["status"], "pending");
    assert_eq!(created["currency"], "USDT");
    assert_eq!(created["network"], "TRC20");
    assert_eq!(dec(&created["fee_amount"]), dec_str("7.5"));
    assert_eq!(dec(&created["total_amount"]), dec_str("257.5"));
    assert_eq!(created["fee"]["status"], "pending");
    assert_eq!(created["fee"]["transaction_id"], created["id"]);

    let id = created["id"].as_i64().unwrap();
    let (status, body) = send(&app, "GET", &format!("/api/transactions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["data"]["fee"]["fee_amount"]), dec_str("7.5"));
    assert!(body["data"]["completed_at"].is_null());
}

#[tokio::test]
async fn test_transaction_requires_positive_amount() {
    let app = test_app().await;

    for amount in ["0", "-10"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/transactions",
            Some(json!({ "from_address": "a", "to_address": "b", "amount": amount })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "amount {}", amount);
    }

    let (_, body) = send(&app, "GET", "/api/transactions", None).await;
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn test_transaction_status_drives_fee() {
    let app = test_app().await;
    let created = open_transaction(&app, "100").await;
    let uri = format!("/api/transactions/{}/status", created["id"]);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "status": "settled" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid status: settled");

    let (status, body) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({ "status": "completed", "transaction_hash": "0xabc123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["transaction_hash"], "0xabc123");
    assert!(!body["data"]["completed_at"].is_null());
    assert_eq!(body["data"]["fee"]["status"], "collected");

    let (_, body) = send(&app, "PATCH", &uri, Some(json!({ "status": "refunded" }))).await;
    assert_eq!(body["data"]["fee"]["status"], "cancelled");
    assert_eq!(body["data"]["transaction_hash"], "0xabc123");

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/transactions/999/status",
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_transaction_list_filters() {
    let app = test_app().await;
    let company = create_company(&app, "판매사").await;
    let listing = create_listing(&app, company).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/transactions",
        Some(json!({
            "listing_id": listing,
            "seller_company_id": company,
            "from_address": "TBuyer",
            "to_address": "TSeller",
            "amount": "40",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    open_transaction(&app, "10").await;

    let (_, body) = send(&app, "GET", "/api/transactions", None).await;
    assert_eq!(body["data"]["total"], 2);

    let (_, body) = send(
        &app,
        "GET",
        &format!("/api/transactions?listing_id={}", listing),
        None,
    )
    .await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["transactions"][0]["listing_id"], listing);

    let (_, body) = send(&app, "GET", "/api/transactions?status=completed", None).await;
    assert_eq!(body["data"]["total"], 0);

    let (status, _) = send(
        &app,
        "POST",
        "/api/transactions",
        Some(json!({ "listing_id": 9999, "from_address": "a", "to_address": "b", "amount": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wallet_registration() {
    let app = test_app().await;
    let company = create_company(&app, "지갑보유").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/wallets",
        Some(json!({ "company_id": company, "address": "TWalletAddr", "label": "정산" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = send(&app, "GET", &format!("/api/wallets/{}", id), None).await;
    assert_eq!(body["data"]["network"], "TRC20");
    assert_eq!(body["data"]["currency"], "USDT");
    assert_eq!(body["data"]["is_verified"], false);

    let (_, body) = send(&app, "GET", &format!("/api/companies/{}/wallets", company), None).await;
    assert_eq!(body["data"][0]["address"], "TWalletAddr");

    let (status, _) = send(&app, "POST", "/api/wallets", Some(json!({ "address": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/api/wallets/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
