use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::db::error::DbError;
use crate::entity::consultation_requests;

#[derive(Clone, Debug)]
pub struct ConsultationRepository {
    conn: DatabaseConnection,
}

impl ConsultationRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        request: consultation_requests::ActiveModel,
    ) -> Result<consultation_requests::Model, DbError> {
        request.insert(&self.conn).await.map_err(Into::into)
    }

    /// Newest requests first, optionally with a single status
    pub async fn find_all(
        &self,
        status: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<consultation_requests::Model>, DbError> {
        let mut query = consultation_requests::Entity::find();

        if let Some(status) = status {
            query = query.filter(consultation_requests::Column::Status.eq(status));
        }

        query
            .order_by_desc(consultation_requests::Column::CreatedAt)
            .order_by_desc(consultation_requests::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn update_status(&self, id: i32, status: &str) -> Result<u64, DbError> {
        let result = consultation_requests::Entity::update_many()
            .col_expr(consultation_requests::Column::Status, Expr::value(status))
            .col_expr(consultation_requests::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(consultation_requests::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }
}
