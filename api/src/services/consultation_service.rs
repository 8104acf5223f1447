// Consultation requests from buyers to companies

use chrono::Utc;
use sea_orm::Set;

use crate::domain::status::{AllowList, ConsultationStatus};
use crate::entity::consultation_requests;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{resolve_page, ConsultationListQuery, CreateConsultationRequest, CreatedResponse};
use crate::services::{non_empty, parse_allowed, require};

const DEFAULT_CONSULTATION_LIMIT: u64 = 50;

pub async fn create_consultation(
    state: &AppState,
    request: CreateConsultationRequest,
) -> ApiResult<CreatedResponse> {
    require(&request.requester_name, "requester_name")?;
    require(&request.requester_email, "requester_email")?;

    if !state.repositories.companies.exists(request.company_id).await? {
        return Err(ApiError::NotFound(format!(
            "Company {} not found",
            request.company_id
        )));
    }

    let now = Utc::now();
    let consultation = consultation_requests::ActiveModel {
        company_id: Set(request.company_id),
        requester_name: Set(request.requester_name.trim().to_string()),
        requester_email: Set(request.requester_email.trim().to_string()),
        requester_phone: Set(non_empty(request.requester_phone)),
        message: Set(non_empty(request.message)),
        status: Set(ConsultationStatus::Pending.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = state
        .repositories
        .consultations
        .create(consultation)
        .await?;
    tracing::info!(
        "Consultation {} requested for company {}",
        created.id,
        created.company_id
    );

    Ok(CreatedResponse { id: created.id })
}

pub async fn list_consultations(
    state: &AppState,
    query: &ConsultationListQuery,
) -> ApiResult<Vec<consultation_requests::Model>> {
    let status = query
        .status
        .as_deref()
        .map(parse_allowed::<ConsultationStatus>)
        .transpose()?;
    let (limit, offset) = resolve_page(query.limit, query.offset, DEFAULT_CONSULTATION_LIMIT);

    state
        .repositories
        .consultations
        .find_all(status.as_ref().map(ConsultationStatus::as_str), limit, offset)
        .await
        .map_err(Into::into)
}

pub async fn update_consultation_status(
    state: &AppState,
    id: i32,
    status: &str,
) -> ApiResult<()> {
    let status: ConsultationStatus = parse_allowed(status)?;

    let updated = state
        .repositories
        .consultations
        .update_status(id, status.as_str())
        .await?;
    if updated == 0 {
        return Err(ApiError::NotFound(format!("Consultation {} not found", id)));
    }

    Ok(())
}
