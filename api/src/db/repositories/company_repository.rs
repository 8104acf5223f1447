// Company database operations implementation

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::db::error::DbError;
use crate::entity::{
    companies, company_certifications, company_patents, company_technologies,
    technology_categories,
};

pub type TechnologyWithCategory = (
    company_technologies::Model,
    Option<technology_categories::Model>,
);

/// Repository for company database operations
#[derive(Clone, Debug)]
pub struct CompanyRepository {
    conn: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new company repository with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        CompanyRepository { conn }
    }

    /// Lists companies newest first, optionally filtered by status and country
    pub async fn find_all(
        &self,
        status: Option<&str>,
        country: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<companies::Model>, DbError> {
        let mut query = companies::Entity::find();

        if let Some(status) = status {
            query = query.filter(companies::Column::Status.eq(status));
        }
        if let Some(country) = country {
            query = query.filter(companies::Column::Country.eq(country));
        }

        query
            .order_by_desc(companies::Column::CreatedAt)
            .order_by_desc(companies::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<companies::Model>, DbError> {
        companies::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbError> {
        let count = companies::Entity::find_by_id(id).count(&self.conn).await?;
        Ok(count > 0)
    }

    pub async fn create(&self, company: companies::ActiveModel) -> Result<companies::Model, DbError> {
        company.insert(&self.conn).await.map_err(Into::into)
    }

    /// Sets the review status, returning the number of rows touched
    pub async fn update_status(&self, id: i32, status: &str) -> Result<u64, DbError> {
        let result = companies::Entity::update_many()
            .col_expr(companies::Column::Status, Expr::value(status))
            .col_expr(companies::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(companies::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn get_certifications(
        &self,
        company_id: i32,
    ) -> Result<Vec<company_certifications::Model>, DbError> {
        company_certifications::Entity::find()
            .filter(company_certifications::Column::CompanyId.eq(company_id))
            .order_by_asc(company_certifications::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_patents(
        &self,
        company_id: i32,
    ) -> Result<Vec<company_patents::Model>, DbError> {
        company_patents::Entity::find()
            .filter(company_patents::Column::CompanyId.eq(company_id))
            .order_by_asc(company_patents::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Technologies of a company joined with their category
    pub async fn get_technologies(
        &self,
        company_id: i32,
    ) -> Result<Vec<TechnologyWithCategory>, DbError> {
        company_technologies::Entity::find()
            .find_also_related(technology_categories::Entity)
            .filter(company_technologies::Column::CompanyId.eq(company_id))
            .order_by_asc(company_technologies::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn add_certification(
        &self,
        certification: company_certifications::ActiveModel,
    ) -> Result<company_certifications::Model, DbError> {
        certification.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn add_patent(
        &self,
        patent: company_patents::ActiveModel,
    ) -> Result<company_patents::Model, DbError> {
        patent.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn add_technology(
        &self,
        technology: company_technologies::ActiveModel,
    ) -> Result<company_technologies::Model, DbError> {
        technology.insert(&self.conn).await.map_err(Into::into)
    }
}
