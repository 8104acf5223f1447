// Wallet endpoint handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::entity::wallets;
use crate::error::{ApiJson, ApiPath, ApiResult};
use crate::handlers::AppState;
use crate::models::{ApiResponse, CreateWalletRequest, CreatedResponse};
use crate::services::wallet_service;

/// Handler for POST /api/wallets
pub async fn create_wallet(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateWalletRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)> {
    let created = wallet_service::create_wallet(&state, request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// Handler for GET /api/wallets/{id}
pub async fn get_wallet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<ApiResponse<wallets::Model>>> {
    let wallet = wallet_service::get_wallet(&state, id).await?;
    Ok(Json(ApiResponse::ok(wallet)))
}

/// Handler for GET /api/companies/{id}/wallets
pub async fn list_company_wallets(
    State(state): State<AppState>,
    ApiPath(company_id): ApiPath<i32>,
) -> ApiResult<Json<ApiResponse<Vec<wallets::Model>>>> {
    let wallets = wallet_service::list_company_wallets(&state, company_id).await?;
    Ok(Json(ApiResponse::ok(wallets)))
}
