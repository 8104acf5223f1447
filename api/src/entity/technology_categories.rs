// Technology category taxonomy (two levels, seeded by migration)
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "technology_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub parent_id: Option<i32>,
    pub name: String,
    pub name_en: Option<String>,
    pub name_zh: Option<String>,
    pub name_ja: Option<String>,
    pub name_vi: Option<String>,
    pub name_mn: Option<String>,
    pub name_ru: Option<String>,
    pub level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
