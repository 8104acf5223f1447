use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::error::DbError;
use crate::entity::technology_categories;

#[derive(Clone, Debug)]
pub struct CategoryRepository {
    conn: DatabaseConnection,
}

impl CategoryRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All categories ordered by level then id, optionally for a single level
    pub async fn find_all(
        &self,
        level: Option<i32>,
    ) -> Result<Vec<technology_categories::Model>, DbError> {
        let mut query = technology_categories::Entity::find();

        if let Some(level) = level {
            query = query.filter(technology_categories::Column::Level.eq(level));
        }

        query
            .order_by_asc(technology_categories::Column::Level)
            .order_by_asc(technology_categories::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }
}
