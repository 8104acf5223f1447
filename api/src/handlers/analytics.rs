use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::error::{ApiJson, ApiResult};
use crate::handlers::AppState;
use crate::models::{AnalyticsEventRequest, ApiResponse, CreatedResponse};
use crate::services::analytics_service::{self, ClientInfo};

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Client address as reported by the edge proxy
fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_value(headers, "cf-connecting-ip").or_else(|| {
        header_value(headers, "x-forwarded-for")
            .and_then(|v| v.split(',').next().map(|ip| ip.trim().to_string()))
            .filter(|ip| !ip.is_empty())
    })
}

/// Handler for POST /api/analytics
pub async fn record_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(request): ApiJson<AnalyticsEventRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)> {
    let client = ClientInfo {
        user_agent: header_value(&headers, "user-agent"),
        ip_address: client_ip(&headers),
    };

    let created = analytics_service::record_event(&state, request, client).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}
