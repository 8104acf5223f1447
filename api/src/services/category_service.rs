use crate::entity::technology_categories;
use crate::error::ApiResult;
use crate::handlers::AppState;

pub async fn list_categories(
    state: &AppState,
    level: Option<i32>,
) -> ApiResult<Vec<technology_categories::Model>> {
    state
        .repositories
        .categories
        .find_all(level)
        .await
        .map_err(|e| {
            tracing::warn!("Database error in list_categories: {:?}", e);
            e.into()
        })
}
