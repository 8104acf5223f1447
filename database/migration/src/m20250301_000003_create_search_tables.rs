use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create image search log table
        manager
            .create_table(
                Table::create()
                    .table(ImageSearchLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImageSearchLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImageSearchLogs::SessionId).string())
                    .col(ColumnDef::new(ImageSearchLogs::ImageUrl).text())
                    .col(ColumnDef::new(ImageSearchLogs::AnalysisResult).json_binary())
                    .col(ColumnDef::new(ImageSearchLogs::DetectedCategory).string())
                    .col(ColumnDef::new(ImageSearchLogs::DetectedFeatures).json_binary())
                    .col(
                        ColumnDef::new(ImageSearchLogs::SearchTimestamp)
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
                    .name("idx_image_search_logs_timestamp")
                    .table(ImageSearchLogs::Table)
                    .col(ImageSearchLogs::SearchTimestamp)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create match results table
        manager
            .create_table(
                Table::create()
                    .table(MatchResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchResults::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MatchResults::SearchLogId).integer())
                    .col(ColumnDef::new(MatchResults::CompanyId).integer().not_null())
                    .col(ColumnDef::new(MatchResults::MatchScore).double().not_null())
                    .col(ColumnDef::new(MatchResults::MatchReason).json_binary())
                    .col(
                        ColumnDef::new(MatchResults::IsContacted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MatchResults::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_results_search_log")
                            .from(MatchResults::Table, MatchResults::SearchLogId)
                            .to(ImageSearchLogs::Table, ImageSearchLogs::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_results_company")
                            .from(MatchResults::Table, MatchResults::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_results_search_log_id")
                    .table(MatchResults::Table)
                    .col(MatchResults::SearchLogId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchResults::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ImageSearchLogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum ImageSearchLogs {
    Table,
    Id,
    SessionId,
    ImageUrl,
    AnalysisResult,
    DetectedCategory,
    DetectedFeatures,
    SearchTimestamp,
}

#[derive(Iden)]
enum MatchResults {
    Table,
    Id,
    SearchLogId,
    CompanyId,
    MatchScore,
    MatchReason,
    IsContacted,
    CreatedAt,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
}
