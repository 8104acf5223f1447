use sea_orm::{ActiveModelTrait, DatabaseConnection};

use crate::db::error::DbError;
use crate::entity::user_analytics;

#[derive(Clone, Debug)]
pub struct AnalyticsRepository {
    conn: DatabaseConnection,
}

impl AnalyticsRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        event: user_analytics::ActiveModel,
    ) -> Result<user_analytics::Model, DbError> {
        event.insert(&self.conn).await.map_err(Into::into)
    }
}
