use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiJson, ApiResult};
use crate::handlers::AppState;
use crate::models::{ApiResponse, CreateConsultationRequest, CreatedResponse};
use crate::services::consultation_service;

/// Handler for POST /api/consultations
pub async fn create_consultation(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateConsultationRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)> {
    let created = consultation_service::create_consultation(&state, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(created, "Consultation request sent")),
    ))
}
