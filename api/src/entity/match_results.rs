// Match results - Companies returned for an image search, one row per match
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub search_log_id: Option<i32>,
    pub company_id: i32,
    pub match_score: f64,
    pub match_reason: Option<Json>,
    pub is_contacted: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
