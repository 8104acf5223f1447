use rust_decimal::Decimal;

use crate::entity::exchange_rates;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{ExchangeRateQuery, UpsertExchangeRateRequest};
use crate::services::{non_empty, require};

/// Currency codes are compared upper-case
pub fn normalize_currency(code: &str) -> String {
    code.trim().to_uppercase()
}

pub async fn list_rates(
    state: &AppState,
    query: &ExchangeRateQuery,
) -> ApiResult<Vec<exchange_rates::Model>> {
    let base = query.base.as_deref().map(normalize_currency);
    let quote = query.quote.as_deref().map(normalize_currency);

    state
        .repositories
        .exchange_rates
        .find_all(base.as_deref(), quote.as_deref())
        .await
        .map_err(Into::into)
}

pub async fn upsert_rate(
    state: &AppState,
    request: UpsertExchangeRateRequest,
) -> ApiResult<exchange_rates::Model> {
    require(&request.base_currency, "base_currency")?;
    require(&request.quote_currency, "quote_currency")?;
    if request.rate <= Decimal::ZERO {
        return Err(ApiError::InvalidRequest(
            "rate must be greater than zero".to_string(),
        ));
    }

    let base = normalize_currency(&request.base_currency);
    let quote = normalize_currency(&request.quote_currency);

    let saved = state
        .repositories
        .exchange_rates
        .upsert(&base, &quote, request.rate, non_empty(request.source))
        .await?;
    tracing::info!("Exchange rate {}/{} set to {}", base, quote, saved.rate);

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_currency() {
        assert_eq!(normalize_currency(" krw "), "KRW");
        assert_eq!(normalize_currency("USDT"), "USDT");
    }
}
