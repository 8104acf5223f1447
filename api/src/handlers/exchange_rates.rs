use axum::{
    extract::State,
    Json,
};

use crate::entity::exchange_rates;
use crate::error::{ApiQuery, ApiResult};
use crate::handlers::AppState;
use crate::models::{ApiResponse, ExchangeRateQuery};
use crate::services::exchange_rate_service;

/// Handler for GET /api/exchange-rates
pub async fn list_exchange_rates(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ExchangeRateQuery>,
) -> ApiResult<Json<ApiResponse<Vec<exchange_rates::Model>>>> {
    let rates = exchange_rate_service::list_rates(&state, &params).await?;
    Ok(Json(ApiResponse::ok(rates)))
}
