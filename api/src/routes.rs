// HTTP routing for the TechFinder API

use std::time::Duration;

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    admin, analytics, categories, companies, consultations, exchange_rates, health, listings,
    search, transactions, wallets, AppState,
};

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        // Companies
        .route(
            "/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route("/companies/{id}", get(companies::get_company))
        .route(
            "/companies/{id}/certifications",
            post(companies::add_certification),
        )
        .route("/companies/{id}/patents", post(companies::add_patent))
        .route("/companies/{id}/technologies", post(companies::add_technology))
        .route("/companies/{id}/wallets", get(wallets::list_company_wallets))
        // Listings
        .route(
            "/listings",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route("/listings/{id}", get(listings::get_listing))
        .route("/categories", get(categories::list_categories))
        .route("/search/image", post(search::search_by_image))
        .route("/consultations", post(consultations::create_consultation))
        .route("/analytics", post(analytics::record_event))
        // Payments
        .route("/wallets", post(wallets::create_wallet))
        .route("/wallets/{id}", get(wallets::get_wallet))
        .route(
            "/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route("/transactions/quote", post(transactions::quote))
        .route("/transactions/{id}", get(transactions::get_transaction))
        .route(
            "/transactions/{id}/status",
            patch(transactions::update_transaction_status),
        )
        .route("/exchange-rates", get(exchange_rates::list_exchange_rates))
        // Admin
        .route(
            "/admin/companies/{id}/status",
            patch(admin::update_company_status),
        )
        .route(
            "/admin/listings/{id}/status",
            patch(admin::update_listing_status),
        )
        .route("/admin/consultations", get(admin::list_consultations))
        .route(
            "/admin/consultations/{id}/status",
            patch(admin::update_consultation_status),
        )
        .route("/admin/exchange-rates", put(admin::upsert_exchange_rate))
}

/// Builds the full application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
