// Wallet registry. Addresses are stored as given; nothing is checked on chain.

use chrono::Utc;
use sea_orm::Set;

use crate::entity::wallets;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{CreateWalletRequest, CreatedResponse};
use crate::services::{non_empty, require};

pub const DEFAULT_NETWORK: &str = "TRC20";
pub const DEFAULT_CURRENCY: &str = "USDT";

pub async fn create_wallet(
    state: &AppState,
    request: CreateWalletRequest,
) -> ApiResult<CreatedResponse> {
    require(&request.address, "address")?;

    if let Some(company_id) = request.company_id {
        if !state.repositories.companies.exists(company_id).await? {
            return Err(ApiError::NotFound(format!("Company {} not found", company_id)));
        }
    }

    let now = Utc::now();
    let wallet = wallets::ActiveModel {
        company_id: Set(request.company_id),
        address: Set(request.address.trim().to_string()),
        network: Set(non_empty(request.network).unwrap_or_else(|| DEFAULT_NETWORK.to_string())),
        currency: Set(non_empty(request.currency)
            .map(|c| c.trim().to_uppercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())),
        label: Set(non_empty(request.label)),
        is_verified: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let wallet = state.repositories.wallets.create(wallet).await?;
    tracing::info!("Registered {} wallet {}", wallet.network, wallet.id);

    Ok(CreatedResponse { id: wallet.id })
}

pub async fn get_wallet(state: &AppState, id: i32) -> ApiResult<wallets::Model> {
    state
        .repositories
        .wallets
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Wallet {} not found", id)))
}

pub async fn list_company_wallets(
    state: &AppState,
    company_id: i32,
) -> ApiResult<Vec<wallets::Model>> {
    if !state.repositories.companies.exists(company_id).await? {
        return Err(ApiError::NotFound(format!("Company {} not found", company_id)));
    }

    state
        .repositories
        .wallets
        .find_by_company(company_id)
        .await
        .map_err(Into::into)
}
