pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_company_tables;
mod m20250301_000002_create_listings_table;
mod m20250301_000003_create_search_tables;
mod m20250301_000004_create_engagement_tables;
mod m20250415_000001_create_payment_tables;
mod m20250415_000002_seed_technology_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_company_tables::Migration),
            Box::new(m20250301_000002_create_listings_table::Migration),
            Box::new(m20250301_000003_create_search_tables::Migration),
            Box::new(m20250301_000004_create_engagement_tables::Migration),
            Box::new(m20250415_000001_create_payment_tables::Migration),
            Box::new(m20250415_000002_seed_technology_categories::Migration),
        ]
    }
}
