//! Entity module for database models

pub mod companies;
pub mod company_certifications;
pub mod company_patents;
pub mod company_technologies;
pub mod consultation_requests;
pub mod exchange_rates;
pub mod image_search_logs;
pub mod match_results;
pub mod platform_fees;
pub mod technology_categories;
pub mod technology_listings;
pub mod transactions;
pub mod user_analytics;
pub mod wallets;
