// Health check endpoint handler implementation

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::handlers::AppState;
use crate::models::ApiResponse;
use crate::services::health::HealthChecker;

/// Handler for GET /api/health - Verifies the API and its database are reachable
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let health_checker = HealthChecker::new(state.repositories.connection());
    if health_checker.check().await {
        (
            StatusCode::OK,
            Json(json!(ApiResponse::message("TechFinder API is running"))),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "Database unavailable"
            })),
        )
    }
}
