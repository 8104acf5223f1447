use chrono::Utc;
use sea_orm::Set;

use crate::domain::i18n::Language;
use crate::entity::user_analytics;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{AnalyticsEventRequest, CreatedResponse};
use crate::services::{non_empty, require};

/// Request metadata captured alongside an analytics event
#[derive(Debug, Default)]
pub struct ClientInfo {
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

pub async fn record_event(
    state: &AppState,
    request: AnalyticsEventRequest,
    client: ClientInfo,
) -> ApiResult<CreatedResponse> {
    require(&request.event_type, "event_type")?;

    let language = Language::from_query(request.language.as_deref());

    let event = user_analytics::ActiveModel {
        session_id: Set(non_empty(request.session_id)),
        event_type: Set(request.event_type),
        event_data: Set(request.event_data),
        user_agent: Set(client.user_agent),
        ip_address: Set(client.ip_address),
        language: Set(language.as_str().to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let created = state.repositories.analytics.create(event).await?;
    Ok(CreatedResponse { id: created.id })
}
