use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Wallets (free-text USDT addresses)
        manager
            .create_table(
                Table::create()
                    .table(Wallets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wallets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wallets::CompanyId).integer())
                    .col(ColumnDef::new(Wallets::Address).string().not_null())
                    .col(ColumnDef::new(Wallets::Network).string().not_null().default("TRC20"))
                    .col(ColumnDef::new(Wallets::Currency).string().not_null().default("USDT"))
                    .col(ColumnDef::new(Wallets::Label).string())
                    .col(
                        ColumnDef::new(Wallets::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Wallets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Wallets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wallets_company")
                            .from(Wallets::Table, Wallets::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wallets_company_id")
                    .table(Wallets::Table)
                    .col(Wallets::CompanyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Transactions (amounts stored with USDT precision)
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::ListingId).integer())
                    .col(ColumnDef::new(Transactions::BuyerCompanyId).integer())
                    .col(ColumnDef::new(Transactions::SellerCompanyId).integer())
                    .col(ColumnDef::new(Transactions::FromAddress).string().not_null())
                    .col(ColumnDef::new(Transactions::ToAddress).string().not_null())
                    .col(ColumnDef::new(Transactions::Amount).decimal_len(20, 6).not_null())
                    .col(ColumnDef::new(Transactions::FeeAmount).decimal_len(20, 6).not_null())
                    .col(ColumnDef::new(Transactions::TotalAmount).decimal_len(20, 6).not_null())
                    .col(ColumnDef::new(Transactions::Currency).string().not_null().default("USDT"))
                    .col(ColumnDef::new(Transactions::Network).string().not_null().default("TRC20"))
                    .col(
                        ColumnDef::new(Transactions::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Transactions::TransactionHash).string())
                    .col(ColumnDef::new(Transactions::Memo).text())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Transactions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Transactions::CompletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_listing")
                            .from(Transactions::Table, Transactions::ListingId)
                            .to(TechnologyListings::Table, TechnologyListings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_status")
                    .table(Transactions::Table)
                    .col(Transactions::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_listing_id")
                    .table(Transactions::Table)
                    .col(Transactions::ListingId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Platform fees (one row per transaction)
        manager
            .create_table(
                Table::create()
                    .table(PlatformFees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlatformFees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlatformFees::TransactionId).integer().not_null())
                    .col(ColumnDef::new(PlatformFees::FeeRate).decimal_len(6, 4).not_null())
                    .col(ColumnDef::new(PlatformFees::FeeAmount).decimal_len(20, 6).not_null())
                    .col(ColumnDef::new(PlatformFees::Currency).string().not_null().default("USDT"))
                    .col(
                        ColumnDef::new(PlatformFees::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(PlatformFees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PlatformFees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_platform_fees_transaction")
                            .from(PlatformFees::Table, PlatformFees::TransactionId)
                            .to(Transactions::Table, Transactions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .unique()
                    .name("idx_platform_fees_transaction_unique")
                    .table(PlatformFees::Table)
                    .col(PlatformFees::TransactionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Exchange rates (base -> quote)
        manager
            .create_table(
                Table::create()
                    .table(ExchangeRates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExchangeRates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExchangeRates::BaseCurrency).string().not_null())
                    .col(ColumnDef::new(ExchangeRates::QuoteCurrency).string().not_null())
                    .col(ColumnDef::new(ExchangeRates::Rate).decimal_len(20, 8).not_null())
                    .col(ColumnDef::new(ExchangeRates::Source).string())
                    .col(
                        ColumnDef::new(ExchangeRates::UpdatedAt)
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
                    .unique()
                    .name("idx_exchange_rates_pair_unique")
                    .table(ExchangeRates::Table)
                    .col(ExchangeRates::BaseCurrency)
                    .col(ExchangeRates::QuoteCurrency)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(ExchangeRates::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PlatformFees::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Wallets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Wallets {
    Table,
    Id,
    CompanyId,
    Address,
    Network,
    Currency,
    Label,
    IsVerified,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    ListingId,
    BuyerCompanyId,
    SellerCompanyId,
    FromAddress,
    ToAddress,
    Amount,
    FeeAmount,
    TotalAmount,
    Currency,
    Network,
    Status,
    TransactionHash,
    Memo,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
}

#[derive(Iden)]
enum PlatformFees {
    Table,
    Id,
    TransactionId,
    FeeRate,
    FeeAmount,
    Currency,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ExchangeRates {
    Table,
    Id,
    BaseCurrency,
    QuoteCurrency,
    Rate,
    Source,
    UpdatedAt,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
}

#[derive(Iden)]
enum TechnologyListings {
    Table,
    Id,
}
