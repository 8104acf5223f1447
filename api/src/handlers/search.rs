use axum::{extract::State, Json};

use crate::error::{ApiJson, ApiResult};
use crate::handlers::AppState;
use crate::models::{ApiResponse, ImageSearchRequest, ImageSearchResponse};
use crate::services::search_service;

/// Handler for POST /api/search/image
pub async fn search_by_image(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ImageSearchRequest>,
) -> ApiResult<Json<ApiResponse<ImageSearchResponse>>> {
    let result = search_service::search_by_image(&state, request).await?;
    Ok(Json(ApiResponse::ok(result)))
}
