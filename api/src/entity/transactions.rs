// Transactions entity - Simulated USDT payments driven by client status updates
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub listing_id: Option<i32>,
    pub buyer_company_id: Option<i32>,
    pub seller_company_id: Option<i32>,
    pub from_address: String,
    pub to_address: String,
    #[sea_orm(column_type = "Decimal(Some((20, 6)))")]
    pub amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((20, 6)))")]
    pub fee_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((20, 6)))")]
    pub total_amount: Decimal,
    pub currency: String,
    pub network: String,
    pub status: String,
    pub transaction_hash: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub memo: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::platform_fees::Entity")]
    PlatformFee,
}

impl Related<super::platform_fees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlatformFee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
