// Handlers for payment transaction endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::error::{ApiJson, ApiPath, ApiQuery, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    ApiResponse, CreateTransactionRequest, QuoteRequest, QuoteResponse, TransactionDetail,
    TransactionListQuery, TransactionPage, TransactionStatusUpdateRequest,
};
use crate::services::transaction_service;

/// Handler for POST /api/transactions/quote
pub async fn quote(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuoteRequest>,
) -> ApiResult<Json<ApiResponse<QuoteResponse>>> {
    let quote = transaction_service::quote(&state, request).await?;
    Ok(Json(ApiResponse::ok(quote)))
}

/// Handler for POST /api/transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTransactionRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<TransactionDetail>>)> {
    let transaction = transaction_service::create_transaction(&state, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(transaction, "Transaction created")),
    ))
}

/// Handler for GET /api/transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TransactionListQuery>,
) -> ApiResult<Json<ApiResponse<TransactionPage>>> {
    let page = transaction_service::list_transactions(&state, &params).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// Handler for GET /api/transactions/{id}
pub async fn get_transaction(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<ApiResponse<TransactionDetail>>> {
    let transaction = transaction_service::get_transaction(&state, id).await?;
    Ok(Json(ApiResponse::ok(transaction)))
}

/// Handler for PATCH /api/transactions/{id}/status
pub async fn update_transaction_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<TransactionStatusUpdateRequest>,
) -> ApiResult<Json<ApiResponse<TransactionDetail>>> {
    let transaction = transaction_service::update_transaction_status(&state, id, request).await?;
    Ok(Json(ApiResponse::ok(transaction)))
}
