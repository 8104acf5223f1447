use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::Name).string().not_null())
                    .col(ColumnDef::new(Companies::NameEn).string())
                    .col(ColumnDef::new(Companies::NameZh).string())
                    .col(ColumnDef::new(Companies::NameJa).string())
                    .col(ColumnDef::new(Companies::NameVi).string())
                    .col(ColumnDef::new(Companies::NameMn).string())
                    .col(ColumnDef::new(Companies::NameRu).string())
                    .col(ColumnDef::new(Companies::Description).text())
                    .col(ColumnDef::new(Companies::DescriptionEn).text())
                    .col(ColumnDef::new(Companies::DescriptionZh).text())
                    .col(ColumnDef::new(Companies::DescriptionJa).text())
                    .col(ColumnDef::new(Companies::DescriptionVi).text())
                    .col(ColumnDef::new(Companies::DescriptionMn).text())
                    .col(ColumnDef::new(Companies::DescriptionRu).text())
                    .col(ColumnDef::new(Companies::ContactPerson).string())
                    .col(ColumnDef::new(Companies::Email).string().not_null())
                    .col(ColumnDef::new(Companies::Phone).string())
                    .col(ColumnDef::new(Companies::Website).string())
                    .col(ColumnDef::new(Companies::EstablishedYear).integer())
                    .col(ColumnDef::new(Companies::AnnualRevenue).string())
                    .col(ColumnDef::new(Companies::EmployeeCount).integer())
                    .col(ColumnDef::new(Companies::Address).string())
                    .col(
                        ColumnDef::new(Companies::Country)
                            .string()
                            .not_null()
                            .default("KR"),
                    )
                    .col(
                        ColumnDef::new(Companies::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Companies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_status")
                    .table(Companies::Table)
                    .col(Companies::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_country")
                    .table(Companies::Table)
                    .col(Companies::Country)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TechnologyCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechnologyCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TechnologyCategories::ParentId).integer())
                    .col(ColumnDef::new(TechnologyCategories::Name).string().not_null())
                    .col(ColumnDef::new(TechnologyCategories::NameEn).string())
                    .col(ColumnDef::new(TechnologyCategories::NameZh).string())
                    .col(ColumnDef::new(TechnologyCategories::NameJa).string())
                    .col(ColumnDef::new(TechnologyCategories::NameVi).string())
                    .col(ColumnDef::new(TechnologyCategories::NameMn).string())
                    .col(ColumnDef::new(TechnologyCategories::NameRu).string())
                    .col(
                        ColumnDef::new(TechnologyCategories::Level)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CompanyCertifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyCertifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyCertifications::CompanyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyCertifications::CertificationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyCertifications::CertificationNumber).string())
                    .col(ColumnDef::new(CompanyCertifications::IssuedDate).date())
                    .col(ColumnDef::new(CompanyCertifications::ExpiryDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_certifications_company")
                            .from(CompanyCertifications::Table, CompanyCertifications::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_company_certifications_company_id")
                    .table(CompanyCertifications::Table)
                    .col(CompanyCertifications::CompanyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CompanyPatents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyPatents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompanyPatents::CompanyId).integer().not_null())
                    .col(ColumnDef::new(CompanyPatents::PatentNumber).string().not_null())
                    .col(ColumnDef::new(CompanyPatents::PatentTitle).string())
                    .col(ColumnDef::new(CompanyPatents::PatentTitleEn).string())
                    .col(ColumnDef::new(CompanyPatents::FiledDate).date())
                    .col(ColumnDef::new(CompanyPatents::GrantedDate).date())
                    .col(ColumnDef::new(CompanyPatents::Country).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_patents_company")
                            .from(CompanyPatents::Table, CompanyPatents::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_company_patents_company_id")
                    .table(CompanyPatents::Table)
                    .col(CompanyPatents::CompanyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CompanyTechnologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyTechnologies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyTechnologies::CompanyId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyTechnologies::CategoryId).integer())
                    .col(
                        ColumnDef::new(CompanyTechnologies::TechnologyName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyTechnologies::TechnologyNameEn).string())
                    .col(ColumnDef::new(CompanyTechnologies::Description).text())
                    .col(ColumnDef::new(CompanyTechnologies::MaturityLevel).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_technologies_company")
                            .from(CompanyTechnologies::Table, CompanyTechnologies::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_technologies_category")
                            .from(CompanyTechnologies::Table, CompanyTechnologies::CategoryId)
                            .to(TechnologyCategories::Table, TechnologyCategories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_company_technologies_company_id")
                    .table(CompanyTechnologies::Table)
                    .col(CompanyTechnologies::CompanyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(CompanyTechnologies::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CompanyPatents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CompanyCertifications::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TechnologyCategories::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
    Name,
    NameEn,
    NameZh,
    NameJa,
    NameVi,
    NameMn,
    NameRu,
    Description,
    DescriptionEn,
    DescriptionZh,
    DescriptionJa,
    DescriptionVi,
    DescriptionMn,
    DescriptionRu,
    ContactPerson,
    Email,
    Phone,
    Website,
    EstablishedYear,
    AnnualRevenue,
    EmployeeCount,
    Address,
    Country,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TechnologyCategories {
    Table,
    Id,
    ParentId,
    Name,
    NameEn,
    NameZh,
    NameJa,
    NameVi,
    NameMn,
    NameRu,
    Level,
}

#[derive(Iden)]
enum CompanyCertifications {
    Table,
    Id,
    CompanyId,
    CertificationType,
    CertificationNumber,
    IssuedDate,
    ExpiryDate,
}

#[derive(Iden)]
enum CompanyPatents {
    Table,
    Id,
    CompanyId,
    PatentNumber,
    PatentTitle,
    PatentTitleEn,
    FiledDate,
    GrantedDate,
    Country,
}

#[derive(Iden)]
enum CompanyTechnologies {
    Table,
    Id,
    CompanyId,
    CategoryId,
    TechnologyName,
    TechnologyNameEn,
    Description,
    MaturityLevel,
}
