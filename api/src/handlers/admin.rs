// Admin review endpoints

use axum::{
    extract::State,
    Json,
};

use crate::entity::{consultation_requests, exchange_rates};
use crate::error::{ApiJson, ApiPath, ApiQuery, ApiResult};
use crate::handlers::AppState;
use crate::models::{ApiResponse, ConsultationListQuery, StatusUpdateRequest, UpsertExchangeRateRequest};
use crate::services::{
    company_service, consultation_service, exchange_rate_service, listing_service,
};

/// Handler for PATCH /api/admin/companies/{id}/status
pub async fn update_company_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<StatusUpdateRequest>,
) -> ApiResult<Json<ApiResponse<()>>> {
    company_service::update_company_status(&state, id, &request.status).await?;
    Ok(Json(ApiResponse::message("Company status updated")))
}

/// Handler for PATCH /api/admin/listings/{id}/status
pub async fn update_listing_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<StatusUpdateRequest>,
) -> ApiResult<Json<ApiResponse<()>>> {
    listing_service::update_listing_status(&state, id, &request.status).await?;
    Ok(Json(ApiResponse::message("Listing status updated")))
}

/// Handler for GET /api/admin/consultations
pub async fn list_consultations(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ConsultationListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<consultation_requests::Model>>>> {
    let consultations = consultation_service::list_consultations(&state, &params).await?;
    Ok(Json(ApiResponse::ok(consultations)))
}

/// Handler for PATCH /api/admin/consultations/{id}/status
pub async fn update_consultation_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<StatusUpdateRequest>,
) -> ApiResult<Json<ApiResponse<()>>> {
    consultation_service::update_consultation_status(&state, id, &request.status).await?;
    Ok(Json(ApiResponse::message("Consultation status updated")))
}

/// Handler for PUT /api/admin/exchange-rates
pub async fn upsert_exchange_rate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpsertExchangeRateRequest>,
) -> ApiResult<Json<ApiResponse<exchange_rates::Model>>> {
    let rate = exchange_rate_service::upsert_rate(&state, request).await?;
    Ok(Json(ApiResponse::ok(rate)))
}
