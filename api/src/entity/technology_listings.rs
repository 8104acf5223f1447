// Technology listings - offers to sell or collaborate on a technology
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::i18n::LocalizedText;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "technology_listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub technology_id: Option<i32>,
    pub listing_type: String,
    pub title: String,
    pub title_en: Option<String>,
    pub title_zh: Option<String>,
    pub title_ja: Option<String>,
    pub title_vi: Option<String>,
    pub title_mn: Option<String>,
    pub title_ru: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
    pub price_range: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub views: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Company,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn localized_title(&self) -> LocalizedText<'_> {
        LocalizedText {
            base: &self.title,
            en: self.title_en.as_deref(),
            zh: self.title_zh.as_deref(),
            ja: self.title_ja.as_deref(),
            vi: self.title_vi.as_deref(),
            mn: self.title_mn.as_deref(),
            ru: self.title_ru.as_deref(),
        }
    }
}
