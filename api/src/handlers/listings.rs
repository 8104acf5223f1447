// Handlers for technology listing endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::domain::i18n::Language;
use crate::error::{ApiJson, ApiPath, ApiQuery, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    ApiResponse, CreateListingRequest, CreatedResponse, LangQuery, ListingDetail,
    ListingListQuery, ListingSummary,
};
use crate::services::listing_service;

/// Handler for GET /api/listings
pub async fn list_listings(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListingListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<ListingSummary>>>> {
    let listings = listing_service::list_listings(&state, &params).await?;
    Ok(Json(ApiResponse::ok(listings)))
}

/// Handler for GET /api/listings/{id} - Counts a view on every call
pub async fn get_listing(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<LangQuery>,
) -> ApiResult<Json<ApiResponse<ListingDetail>>> {
    let lang = Language::from_query(params.lang.as_deref());
    let listing = listing_service::get_listing(&state, id, lang).await?;
    Ok(Json(ApiResponse::ok(listing)))
}

/// Handler for POST /api/listings
pub async fn create_listing(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateListingRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)> {
    let created = listing_service::create_listing(&state, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            created,
            "Listing created and awaiting review",
        )),
    ))
}
