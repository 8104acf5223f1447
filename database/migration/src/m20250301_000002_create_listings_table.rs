use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechnologyListings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechnologyListings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TechnologyListings::CompanyId).integer().not_null())
                    .col(ColumnDef::new(TechnologyListings::TechnologyId).integer())
                    .col(ColumnDef::new(TechnologyListings::ListingType).string().not_null())
                    .col(ColumnDef::new(TechnologyListings::Title).string().not_null())
                    .col(ColumnDef::new(TechnologyListings::TitleEn).string())
                    .col(ColumnDef::new(TechnologyListings::TitleZh).string())
                    .col(ColumnDef::new(TechnologyListings::TitleJa).string())
                    .col(ColumnDef::new(TechnologyListings::TitleVi).string())
                    .col(ColumnDef::new(TechnologyListings::TitleMn).string())
                    .col(ColumnDef::new(TechnologyListings::TitleRu).string())
                    .col(ColumnDef::new(TechnologyListings::Description).text().not_null())
                    .col(ColumnDef::new(TechnologyListings::DescriptionEn).text())
                    .col(ColumnDef::new(TechnologyListings::PriceRange).string())
                    .col(ColumnDef::new(TechnologyListings::Location).string())
                    .col(
                        ColumnDef::new(TechnologyListings::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(TechnologyListings::Views)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TechnologyListings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TechnologyListings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_technology_listings_company")
                            .from(TechnologyListings::Table, TechnologyListings::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_technology_listings_technology")
                            .from(TechnologyListings::Table, TechnologyListings::TechnologyId)
                            .to(CompanyTechnologies::Table, CompanyTechnologies::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing browse filters on status and type together
        manager
            .create_index(
                Index::create()
                    .name("idx_technology_listings_status_type")
                    .table(TechnologyListings::Table)
                    .col(TechnologyListings::Status)
                    .col(TechnologyListings::ListingType)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_technology_listings_company_id")
                    .table(TechnologyListings::Table)
                    .col(TechnologyListings::CompanyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TechnologyListings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TechnologyListings {
    Table,
    Id,
    CompanyId,
    TechnologyId,
    ListingType,
    Title,
    TitleEn,
    TitleZh,
    TitleJa,
    TitleVi,
    TitleMn,
    TitleRu,
    Description,
    DescriptionEn,
    PriceRange,
    Location,
    Status,
    Views,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
}

#[derive(Iden)]
enum CompanyTechnologies {
    Table,
    Id,
}
