use axum::{
    extract::State,
    Json,
};

use crate::entity::technology_categories;
use crate::error::{ApiQuery, ApiResult};
use crate::handlers::AppState;
use crate::models::{ApiResponse, CategoryQuery};
use crate::services::category_service;

/// Handler for GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CategoryQuery>,
) -> ApiResult<Json<ApiResponse<Vec<technology_categories::Model>>>> {
    let categories = category_service::list_categories(&state, params.level).await?;
    Ok(Json(ApiResponse::ok(categories)))
}
