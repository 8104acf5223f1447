// Database repository management

mod analytics_repository;
mod category_repository;
mod company_repository;
mod consultation_repository;
mod exchange_rate_repository;
mod listing_repository;
mod search_repository;
mod transaction_repository;
mod wallet_repository;

pub use analytics_repository::AnalyticsRepository;
pub use category_repository::CategoryRepository;
pub use company_repository::{CompanyRepository, TechnologyWithCategory};
pub use consultation_repository::ConsultationRepository;
pub use exchange_rate_repository::ExchangeRateRepository;
pub use listing_repository::{ListingRepository, ListingWithCompany};
pub use search_repository::{MatchedCompany, SearchRepository};
pub use transaction_repository::{TransactionRepository, TransactionWithFee};
pub use wallet_repository::WalletRepository;

use sea_orm::DatabaseConnection;

/// Container for all database repositories
#[derive(Clone)]
pub struct Repositories {
    pub companies: CompanyRepository,
    pub listings: ListingRepository,
    pub categories: CategoryRepository,
    pub search: SearchRepository,
    pub consultations: ConsultationRepository,
    pub analytics: AnalyticsRepository,
    pub wallets: WalletRepository,
    pub transactions: TransactionRepository,
    pub exchange_rates: ExchangeRateRepository,
    conn: DatabaseConnection,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            companies: CompanyRepository::new(conn.clone()),
            listings: ListingRepository::new(conn.clone()),
            categories: CategoryRepository::new(conn.clone()),
            search: SearchRepository::new(conn.clone()),
            consultations: ConsultationRepository::new(conn.clone()),
            analytics: AnalyticsRepository::new(conn.clone()),
            wallets: WalletRepository::new(conn.clone()),
            transactions: TransactionRepository::new(conn.clone()),
            exchange_rates: ExchangeRateRepository::new(conn.clone()),
            conn,
        }
    }

    /// Returns the shared connection, used for health checks
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
