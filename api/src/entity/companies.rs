// Companies entity - Registered sellers, reviewed by an admin
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::i18n::LocalizedText;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
    pub name_zh: Option<String>,
    pub name_ja: Option<String>,
    pub name_vi: Option<String>,
    pub name_mn: Option<String>,
    pub name_ru: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_zh: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_ja: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_vi: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_mn: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_ru: Option<String>,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub established_year: Option<i32>,
    pub annual_revenue: Option<String>,
    pub employee_count: Option<i32>,
    pub address: Option<String>,
    pub country: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn localized_name(&self) -> LocalizedText<'_> {
        LocalizedText {
            base: &self.name,
            en: self.name_en.as_deref(),
            zh: self.name_zh.as_deref(),
            ja: self.name_ja.as_deref(),
            vi: self.name_vi.as_deref(),
            mn: self.name_mn.as_deref(),
            ru: self.name_ru.as_deref(),
        }
    }
}
