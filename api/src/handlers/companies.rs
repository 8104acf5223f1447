// Handlers for company directory endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::domain::i18n::Language;
use crate::error::{ApiJson, ApiPath, ApiQuery, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    ApiResponse, CompanyDetail, CompanyListQuery, CompanySummary, CreateCertificationRequest,
    CreateCompanyRequest, CreatePatentRequest, CreateTechnologyRequest, CreatedResponse,
    LangQuery,
};
use crate::services::company_service;

/// Handler for GET /api/companies
pub async fn list_companies(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CompanyListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<CompanySummary>>>> {
    let companies = company_service::list_companies(&state, &params).await?;
    Ok(Json(ApiResponse::ok(companies)))
}

/// Handler for GET /api/companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<LangQuery>,
) -> ApiResult<Json<ApiResponse<CompanyDetail>>> {
    let lang = Language::from_query(params.lang.as_deref());
    let company = company_service::get_company(&state, id, lang).await?;
    Ok(Json(ApiResponse::ok(company)))
}

/// Handler for POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCompanyRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)> {
    let created = company_service::create_company(&state, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            created,
            "Company registered and awaiting review",
        )),
    ))
}

pub async fn add_certification(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<CreateCertificationRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)> {
    let created = company_service::add_certification(&state, id, request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

pub async fn add_patent(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<CreatePatentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)> {
    let created = company_service::add_patent(&state, id, request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

pub async fn add_technology(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<CreateTechnologyRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)> {
    let created = company_service::add_technology(&state, id, request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}
