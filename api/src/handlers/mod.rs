// Handlers Module
// This module contains the API endpoint handlers

pub mod admin;
pub mod analytics;
pub mod categories;
pub mod companies;
pub mod consultations;
pub mod exchange_rates;
pub mod health;
pub mod listings;
pub mod search;
pub mod transactions;
pub mod wallets;

use std::sync::Arc;

use crate::db::Repositories;
use crate::domain::image_analysis::ImageAnalyzer;

/// Shared state handed to every handler
pub struct ApiState {
    pub repositories: Repositories,
    pub analyzer: Arc<dyn ImageAnalyzer>,
}

// Type alias for the application state
pub type AppState = Arc<ApiState>;
