use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConsultationRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConsultationRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConsultationRequests::CompanyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsultationRequests::RequesterName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsultationRequests::RequesterEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ConsultationRequests::RequesterPhone).string())
                    .col(ColumnDef::new(ConsultationRequests::Message).text())
                    .col(
                        ColumnDef::new(ConsultationRequests::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(ConsultationRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ConsultationRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_consultation_requests_company")
                            .from(ConsultationRequests::Table, ConsultationRequests::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_consultation_requests_status")
                    .table(ConsultationRequests::Table)
                    .col(ConsultationRequests::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserAnalytics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserAnalytics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserAnalytics::SessionId).string())
                    .col(ColumnDef::new(UserAnalytics::EventType).string().not_null())
                    .col(ColumnDef::new(UserAnalytics::EventData).json_binary())
                    .col(ColumnDef::new(UserAnalytics::UserAgent).text())
                    .col(ColumnDef::new(UserAnalytics::IpAddress).string())
                    .col(
                        ColumnDef::new(UserAnalytics::Language)
                            .string()
                            .not_null()
                            .default("ko"),
                    )
                    .col(
                        ColumnDef::new(UserAnalytics::CreatedAt)
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
                    .name("idx_user_analytics_event_type")
                    .table(UserAnalytics::Table)
                    .col(UserAnalytics::EventType)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAnalytics::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ConsultationRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum ConsultationRequests {
    Table,
    Id,
    CompanyId,
    RequesterName,
    RequesterEmail,
    RequesterPhone,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum UserAnalytics {
    Table,
    Id,
    SessionId,
    EventType,
    EventData,
    UserAgent,
    IpAddress,
    Language,
    CreatedAt,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
}
