// Business logic service implementations

pub mod analytics_service;
pub mod category_service;
pub mod company_service;
pub mod consultation_service;
pub mod exchange_rate_service;
pub mod health;
pub mod listing_service;
pub mod search_service;
pub mod transaction_service;
pub mod wallet_service;

use crate::domain::status::AllowList;
use crate::error::ApiError;

/// Parses a client supplied status against its allow-list
pub(crate) fn parse_allowed<T: AllowList>(value: &str) -> Result<T, ApiError> {
    T::from_text(value).map_err(|err| ApiError::InvalidRequest(err.to_string()))
}

/// Rejects missing or blank required text fields
pub(crate) fn require(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// Empty strings from forms are stored as NULL
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
