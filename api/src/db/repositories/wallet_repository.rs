use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::db::error::DbError;
use crate::entity::wallets;

/// Repository for registered payment wallets
#[derive(Clone, Debug)]
pub struct WalletRepository {
    conn: DatabaseConnection,
}

impl WalletRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&self, wallet: wallets::ActiveModel) -> Result<wallets::Model, DbError> {
        wallet.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<wallets::Model>, DbError> {
        wallets::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_company(&self, company_id: i32) -> Result<Vec<wallets::Model>, DbError> {
        wallets::Entity::find()
            .filter(wallets::Column::CompanyId.eq(company_id))
            .order_by_asc(wallets::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }
}
