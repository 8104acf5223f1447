use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::db::error::DbError;
use crate::entity::exchange_rates;

#[derive(Clone, Debug)]
pub struct ExchangeRateRepository {
    conn: DatabaseConnection,
}

impl ExchangeRateRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn find_all(
        &self,
        base: Option<&str>,
        quote: Option<&str>,
    ) -> Result<Vec<exchange_rates::Model>, DbError> {
        let mut query = exchange_rates::Entity::find();

        if let Some(base) = base {
            query = query.filter(exchange_rates::Column::BaseCurrency.eq(base));
        }
        if let Some(quote) = quote {
            query = query.filter(exchange_rates::Column::QuoteCurrency.eq(quote));
        }

        query
            .order_by_asc(exchange_rates::Column::BaseCurrency)
            .order_by_asc(exchange_rates::Column::QuoteCurrency)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_pair(
        &self,
        base: &str,
        quote: &str,
    ) -> Result<Option<exchange_rates::Model>, DbError> {
        exchange_rates::Entity::find()
            .filter(exchange_rates::Column::BaseCurrency.eq(base))
            .filter(exchange_rates::Column::QuoteCurrency.eq(quote))
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts or replaces the rate for a currency pair in one statement
    pub async fn upsert(
        &self,
        base: &str,
        quote: &str,
        rate: Decimal,
        source: Option<String>,
    ) -> Result<exchange_rates::Model, DbError> {
        let model = exchange_rates::ActiveModel {
            base_currency: Set(base.to_string()),
            quote_currency: Set(quote.to_string()),
            rate: Set(rate),
            source: Set(source),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        exchange_rates::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    exchange_rates::Column::BaseCurrency,
                    exchange_rates::Column::QuoteCurrency,
                ])
                .update_columns([
                    exchange_rates::Column::Rate,
                    exchange_rates::Column::Source,
                    exchange_rates::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.conn)
            .await?;

        self.get_pair(base, quote).await?.ok_or_else(|| {
            DbError::QueryError(format!("Exchange rate {}/{} missing after upsert", base, quote))
        })
    }
}
