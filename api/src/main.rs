// TechFinder API server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use techfinder_api::config::ApiConfig;
use techfinder_api::db::DbPool;
use techfinder_api::domain::image_analysis::StubImageAnalyzer;
use techfinder_api::handlers::ApiState;
use techfinder_api::routes::create_router;

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded");

    // Establish database connection pool
    let db_pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("Failed to connect to database: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!("Connected to database");

    if config.run_migrations {
        if let Err(err) = db_pool.run_migrations().await {
            tracing::error!("Failed to apply migrations: {}", err);
            std::process::exit(1);
        }
        tracing::info!("Migrations applied");
    }

    let app_state = Arc::new(ApiState {
        repositories: db_pool.repositories(),
        analyzer: Arc::new(StubImageAnalyzer),
    });

    let app = create_router(app_state);

    // Parse server address from config
    let addr: SocketAddr = match config.server_addr().parse() {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!("Invalid address {}: {}", config.server_addr(), err);
            std::process::exit(1);
        }
    };

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind to {}: {}", addr, err);
            std::process::exit(1);
        }
    };
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", err);
    }
}
