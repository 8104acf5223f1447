// Simulated USDT payments with a flat platform fee

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::Set;

use crate::domain::fees::{compute_fee, convert, FeeBreakdown, PLATFORM_FEE_RATE};
use crate::domain::status::{AllowList, TransactionStatus};
use crate::entity::transactions;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    resolve_page, ConvertedAmount, CreateTransactionRequest, QuoteRequest, QuoteResponse,
    TransactionDetail, TransactionListQuery, TransactionPage, TransactionStatusUpdateRequest,
};
use crate::services::exchange_rate_service::normalize_currency;
use crate::services::wallet_service::{DEFAULT_CURRENCY, DEFAULT_NETWORK};
use crate::services::{non_empty, parse_allowed, require};

const DEFAULT_TRANSACTION_LIMIT: u64 = 20;

fn breakdown(amount: Decimal) -> ApiResult<FeeBreakdown> {
    compute_fee(amount).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

/// Fee quote, optionally converted with a stored exchange rate
pub async fn quote(state: &AppState, request: QuoteRequest) -> ApiResult<QuoteResponse> {
    let breakdown = breakdown(request.amount)?;

    let rate = match request.quote_currency.as_deref().map(normalize_currency) {
        Some(quote) if !quote.is_empty() && quote != DEFAULT_CURRENCY => {
            state
                .repositories
                .exchange_rates
                .get_pair(DEFAULT_CURRENCY, &quote)
                .await?
        }
        _ => None,
    };

    let converted = match rate {
        Some(rate) => {
            let total = convert(breakdown.total, rate.rate).ok_or_else(|| {
                ApiError::InvalidRequest("converted amount is out of range".to_string())
            })?;
            Some(ConvertedAmount {
                total,
                rate: rate.rate,
                currency: rate.quote_currency,
            })
        }
        None => None,
    };

    Ok(QuoteResponse {
        breakdown,
        currency: DEFAULT_CURRENCY.to_string(),
        converted,
    })
}

/// Opens a pending payment and its fee record
pub async fn create_transaction(
    state: &AppState,
    request: CreateTransactionRequest,
) -> ApiResult<TransactionDetail> {
    require(&request.from_address, "from_address")?;
    require(&request.to_address, "to_address")?;
    if request.amount <= Decimal::ZERO {
        return Err(ApiError::InvalidRequest(
            "amount must be greater than zero".to_string(),
        ));
    }
    let breakdown = breakdown(request.amount)?;

    if let Some(listing_id) = request.listing_id {
        if state.repositories.listings.get_by_id(listing_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("Listing {} not found", listing_id)));
        }
    }

    let now = Utc::now();
    let transaction = transactions::ActiveModel {
        listing_id: Set(request.listing_id),
        buyer_company_id: Set(request.buyer_company_id),
        seller_company_id: Set(request.seller_company_id),
        from_address: Set(request.from_address.trim().to_string()),
        to_address: Set(request.to_address.trim().to_string()),
        amount: Set(breakdown.amount),
        fee_amount: Set(breakdown.fee),
        total_amount: Set(breakdown.total),
        currency: Set(non_empty(request.currency)
            .map(|c| normalize_currency(&c))
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())),
        network: Set(non_empty(request.network).unwrap_or_else(|| DEFAULT_NETWORK.to_string())),
        status: Set(TransactionStatus::Pending.as_str().to_string()),
        transaction_hash: Set(None),
        memo: Set(non_empty(request.memo)),
        created_at: Set(now),
        updated_at: Set(now),
        completed_at: Set(None),
        ..Default::default()
    };

    let (transaction, fee) = state
        .repositories
        .transactions
        .create_with_fee(transaction, PLATFORM_FEE_RATE)
        .await
        .map_err(|e| {
            tracing::warn!("Database error in create_transaction: {:?}", e);
            ApiError::from(e)
        })?;

    tracing::info!(
        "Transaction {} opened: amount {} fee {} total {}",
        transaction.id,
        breakdown.amount,
        breakdown.fee,
        breakdown.total
    );

    Ok(TransactionDetail {
        transaction,
        fee: Some(fee),
    })
}

pub async fn list_transactions(
    state: &AppState,
    query: &TransactionListQuery,
) -> ApiResult<TransactionPage> {
    let status = query
        .status
        .as_deref()
        .map(parse_allowed::<TransactionStatus>)
        .transpose()?;
    let (limit, offset) = resolve_page(query.limit, query.offset, DEFAULT_TRANSACTION_LIMIT);

    let (transactions, total) = state
        .repositories
        .transactions
        .find_all(
            status.as_ref().map(TransactionStatus::as_str),
            query.listing_id,
            limit,
            offset,
        )
        .await?;

    Ok(TransactionPage {
        transactions,
        total,
        limit,
        offset,
    })
}

pub async fn get_transaction(state: &AppState, id: i32) -> ApiResult<TransactionDetail> {
    let (transaction, fee) = state
        .repositories
        .transactions
        .get_with_fee(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Transaction {} not found", id)))?;

    Ok(TransactionDetail { transaction, fee })
}

/// Client reported status change; the hash is trusted as given
pub async fn update_transaction_status(
    state: &AppState,
    id: i32,
    request: TransactionStatusUpdateRequest,
) -> ApiResult<TransactionDetail> {
    let status: TransactionStatus = parse_allowed(&request.status)?;
    let hash = non_empty(request.transaction_hash).map(|h| h.trim().to_string());

    let (transaction, fee) = state
        .repositories
        .transactions
        .update_status(id, status, hash)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Transaction {} not found", id)))?;

    tracing::info!("Transaction {} status set to {}", id, status);

    Ok(TransactionDetail { transaction, fee })
}
