// Payment transaction and platform fee persistence

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};

use crate::db::error::DbError;
use crate::domain::status::{AllowList, FeeStatus, TransactionStatus};
use crate::entity::{platform_fees, transactions};

pub type TransactionWithFee = (transactions::Model, Option<platform_fees::Model>);

/// Repository for transactions and their fee records
#[derive(Clone, Debug)]
pub struct TransactionRepository {
    conn: DatabaseConnection,
}

impl TransactionRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts a transaction together with its pending fee row.
    /// Either both rows are written or neither is.
    pub async fn create_with_fee(
        &self,
        transaction: transactions::ActiveModel,
        fee_rate: Decimal,
    ) -> Result<(transactions::Model, platform_fees::Model), DbError> {
        let txn = self.conn.begin().await?;

        let transaction = transaction.insert(&txn).await?;

        let fee = platform_fees::ActiveModel {
            transaction_id: Set(transaction.id),
            fee_rate: Set(fee_rate),
            fee_amount: Set(transaction.fee_amount),
            currency: Set(transaction.currency.clone()),
            status: Set(FeeStatus::Pending.as_str().to_string()),
            created_at: Set(transaction.created_at),
            updated_at: Set(transaction.created_at),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok((transaction, fee))
    }

    pub async fn get_with_fee(&self, id: i32) -> Result<Option<TransactionWithFee>, DbError> {
        transactions::Entity::find_by_id(id)
            .find_also_related(platform_fees::Entity)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Newest transactions first plus the total count for the same filters
    pub async fn find_all(
        &self,
        status: Option<&str>,
        listing_id: Option<i32>,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<transactions::Model>, u64), DbError> {
        let query = Self::filtered(status, listing_id);

        let total = query.clone().count(&self.conn).await?;
        let rows = query
            .order_by_desc(transactions::Column::CreatedAt)
            .order_by_desc(transactions::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await?;

        Ok((rows, total))
    }

    fn filtered(status: Option<&str>, listing_id: Option<i32>) -> Select<transactions::Entity> {
        let mut query = transactions::Entity::find();
        if let Some(status) = status {
            query = query.filter(transactions::Column::Status.eq(status));
        }
        if let Some(listing_id) = listing_id {
            query = query.filter(transactions::Column::ListingId.eq(listing_id));
        }
        query
    }

    /// Moves a transaction to `status` and keeps its fee row in step.
    /// Returns `None` when the transaction does not exist.
    pub async fn update_status(
        &self,
        id: i32,
        status: TransactionStatus,
        transaction_hash: Option<String>,
    ) -> Result<Option<TransactionWithFee>, DbError> {
        let txn = self.conn.begin().await?;

        let Some(current) = transactions::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let already_completed = current.completed_at.is_some();
        let mut active: transactions::ActiveModel = current.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(now);
        if let Some(hash) = transaction_hash {
            active.transaction_hash = Set(Some(hash));
        }
        if status == TransactionStatus::Completed && !already_completed {
            active.completed_at = Set(Some(now));
        }
        let updated = active.update(&txn).await?;

        platform_fees::Entity::update_many()
            .col_expr(
                platform_fees::Column::Status,
                Expr::value(status.fee_status().as_str()),
            )
            .col_expr(platform_fees::Column::UpdatedAt, Expr::value(now))
            .filter(platform_fees::Column::TransactionId.eq(id))
            .exec(&txn)
            .await?;

        let fee = platform_fees::Entity::find()
            .filter(platform_fees::Column::TransactionId.eq(id))
            .one(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some((updated, fee)))
    }
}
