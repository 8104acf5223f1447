// Technology listing database operations implementation

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::db::error::DbError;
use crate::entity::{companies, technology_listings};

pub type ListingWithCompany = (technology_listings::Model, Option<companies::Model>);

/// Repository for technology listing operations
#[derive(Clone, Debug)]
pub struct ListingRepository {
    conn: DatabaseConnection,
}

impl ListingRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Lists listings with the given status, newest first, joined with their company
    pub async fn find_by_status(
        &self,
        status: &str,
        listing_type: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<ListingWithCompany>, DbError> {
        let mut query = technology_listings::Entity::find()
            .find_also_related(companies::Entity)
            .filter(technology_listings::Column::Status.eq(status));

        if let Some(listing_type) = listing_type {
            query = query.filter(technology_listings::Column::ListingType.eq(listing_type));
        }

        query
            .order_by_desc(technology_listings::Column::CreatedAt)
            .order_by_desc(technology_listings::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<technology_listings::Model>, DbError> {
        technology_listings::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_with_company(&self, id: i32) -> Result<Option<ListingWithCompany>, DbError> {
        technology_listings::Entity::find_by_id(id)
            .find_also_related(companies::Entity)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Adds one view in a single UPDATE; returns rows touched (0 when missing)
    pub async fn increment_views(&self, id: i32) -> Result<u64, DbError> {
        let result = technology_listings::Entity::update_many()
            .col_expr(
                technology_listings::Column::Views,
                Expr::col(technology_listings::Column::Views).add(1),
            )
            .filter(technology_listings::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn create(
        &self,
        listing: technology_listings::ActiveModel,
    ) -> Result<technology_listings::Model, DbError> {
        listing.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update_status(&self, id: i32, status: &str) -> Result<u64, DbError> {
        let result = technology_listings::Entity::update_many()
            .col_expr(technology_listings::Column::Status, Expr::value(status))
            .col_expr(technology_listings::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(technology_listings::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }
}
