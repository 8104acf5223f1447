// Search-by-image: analyse, log, match companies

use chrono::Utc;
use sea_orm::Set;
use serde_json::json;

use crate::domain::image_analysis::{STUB_CONFIDENCE, STUB_MATCH_REASON};
use crate::entity::image_search_logs;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{ImageSearchRequest, ImageSearchResponse};
use crate::services::non_empty;

pub async fn search_by_image(
    state: &AppState,
    request: ImageSearchRequest,
) -> ApiResult<ImageSearchResponse> {
    let image_url = non_empty(request.image_url);

    let analysis = state.analyzer.analyze(image_url.as_deref());
    let criteria = state.analyzer.match_criteria(&analysis);

    let analysis_json = serde_json::to_value(&analysis)
        .map_err(|e| ApiError::InternalError(format!("Failed to encode analysis: {}", e)))?;

    let log = image_search_logs::ActiveModel {
        session_id: Set(non_empty(request.session_id)),
        image_url: Set(image_url),
        analysis_result: Set(Some(analysis_json)),
        detected_category: Set(analysis.category.clone()),
        detected_features: Set(Some(json!(analysis.features))),
        search_timestamp: Set(Utc::now()),
        ..Default::default()
    };

    let match_reason = json!({
        "reason": STUB_MATCH_REASON,
        "features": analysis.features,
    });

    let (log, matches) = state
        .repositories
        .search
        .record_search(log, &criteria, STUB_CONFIDENCE, match_reason)
        .await
        .map_err(|e| {
            tracing::warn!("Database error in search_by_image: {:?}", e);
            ApiError::from(e)
        })?;

    tracing::info!(
        "Image search {} matched {} companies",
        log.id,
        matches.len()
    );

    Ok(ImageSearchResponse {
        analysis,
        matches,
        search_log_id: log.id,
    })
}
