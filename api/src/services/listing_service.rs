// Technology listing service

use chrono::Utc;
use sea_orm::Set;

use crate::domain::i18n::Language;
use crate::domain::status::{AllowList, ListingStatus, ListingType};
use crate::entity::technology_listings;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    resolve_page, CreateListingRequest, CreatedResponse, ListingDetail, ListingListQuery,
    ListingSummary,
};
use crate::services::{non_empty, parse_allowed, require};

const DEFAULT_LISTING_LIMIT: u64 = 20;

/// Lists listings with their seller; only `active` ones unless a status is given
pub async fn list_listings(
    state: &AppState,
    query: &ListingListQuery,
) -> ApiResult<Vec<ListingSummary>> {
    let lang = Language::from_query(query.lang.as_deref());
    let status = match query.status.as_deref() {
        Some(status) => parse_allowed::<ListingStatus>(status)?,
        None => ListingStatus::Active,
    };
    let listing_type = query
        .listing_type
        .as_deref()
        .map(parse_allowed::<ListingType>)
        .transpose()?;
    let (limit, offset) = resolve_page(query.limit, query.offset, DEFAULT_LISTING_LIMIT);

    let rows = state
        .repositories
        .listings
        .find_by_status(
            status.as_str(),
            listing_type.as_ref().map(ListingType::as_str),
            limit,
            offset,
        )
        .await
        .map_err(|e| {
            tracing::warn!("Database error in list_listings: {:?}", e);
            ApiError::from(e)
        })?;

    Ok(rows
        .into_iter()
        .map(|(listing, company)| ListingSummary {
            display_title: listing.localized_title().pick(lang).to_string(),
            company_name: company.as_ref().map(|c| c.localized_name().pick(lang).to_string()),
            company_name_en: company.as_ref().and_then(|c| c.name_en.clone()),
            company_country: company.map(|c| c.country),
            listing,
        })
        .collect())
}

/// Fetches a listing for display, counting the view first
pub async fn get_listing(state: &AppState, id: i32, lang: Language) -> ApiResult<ListingDetail> {
    let repo = &state.repositories.listings;

    if repo.increment_views(id).await? == 0 {
        return Err(ApiError::NotFound(format!("Listing {} not found", id)));
    }

    let (listing, company) = repo
        .get_with_company(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Listing {} not found", id)))?;

    Ok(ListingDetail {
        display_title: listing.localized_title().pick(lang).to_string(),
        listing,
        company: company.map(Into::into),
    })
}

pub async fn create_listing(
    state: &AppState,
    request: CreateListingRequest,
) -> ApiResult<CreatedResponse> {
    let listing_type: ListingType = parse_allowed(&request.listing_type)?;
    require(&request.title, "title")?;
    require(&request.description, "description")?;

    if !state.repositories.companies.exists(request.company_id).await? {
        return Err(ApiError::NotFound(format!(
            "Company {} not found",
            request.company_id
        )));
    }

    let now = Utc::now();
    let listing = technology_listings::ActiveModel {
        company_id: Set(request.company_id),
        technology_id: Set(request.technology_id),
        listing_type: Set(listing_type.as_str().to_string()),
        title: Set(request.title.trim().to_string()),
        title_en: Set(non_empty(request.title_en)),
        title_zh: Set(non_empty(request.title_zh)),
        title_ja: Set(non_empty(request.title_ja)),
        title_vi: Set(non_empty(request.title_vi)),
        title_mn: Set(non_empty(request.title_mn)),
        title_ru: Set(non_empty(request.title_ru)),
        description: Set(request.description),
        description_en: Set(non_empty(request.description_en)),
        price_range: Set(non_empty(request.price_range)),
        location: Set(non_empty(request.location)),
        status: Set(ListingStatus::Pending.as_str().to_string()),
        views: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let listing = state.repositories.listings.create(listing).await?;
    tracing::info!(
        "Created {} listing {} for company {}",
        listing.listing_type,
        listing.id,
        listing.company_id
    );

    Ok(CreatedResponse { id: listing.id })
}

pub async fn update_listing_status(state: &AppState, id: i32, status: &str) -> ApiResult<()> {
    let status: ListingStatus = parse_allowed(status)?;

    let updated = state
        .repositories
        .listings
        .update_status(id, status.as_str())
        .await?;
    if updated == 0 {
        return Err(ApiError::NotFound(format!("Listing {} not found", id)));
    }

    tracing::info!("Listing {} status set to {}", id, status);
    Ok(())
}
