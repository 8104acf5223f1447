use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Connect to the database configured in `DATABASE_URL`
async fn connect() -> Result<DatabaseConnection, Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    info!(
        "Connecting to database '{}' on {}:{}",
        config.name, config.host, config.port
    );

    Database::connect(&config.url).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        Box::new(e) as Box<dyn Error>
    })
}

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    let all_migrations = Migrator::get_migration_files();
    info!("Found {} migration files", all_migrations.len());
    for m in &all_migrations {
        info!("Migration file: {}", m.name());
    }

    match steps {
        Some(n) => info!("Running {} migrations", n),
        None => info!("Running all pending migrations"),
    }

    match Migrator::up(&connection, steps).await {
        Ok(_) => {
            info!("Migrations applied successfully");
            Ok(())
        }
        Err(e) => {
            error!("Failed to run migrations: {}", e);
            error!("Migration error details: {:?}", e);
            Err(Box::new(e))
        }
    }
}

/// Revert the newest `steps` applied migrations
pub async fn rollback(steps: u32) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Reverting {} migration(s)", steps);
    Migrator::down(&connection, Some(steps)).await.map_err(|e| {
        error!("Failed to revert migrations: {}", e);
        Box::new(e) as Box<dyn Error>
    })?;

    info!("Rollback complete");
    Ok(())
}

/// Drop every table and re-apply all migrations
pub async fn reset() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Resetting database: dropping all tables and re-running migrations");
    Migrator::fresh(&connection).await.map_err(|e| {
        error!("Failed to reset database: {}", e);
        Box::new(e) as Box<dyn Error>
    })?;

    info!("Database reset complete");
    Ok(())
}

/// Print applied and pending migrations
pub async fn status() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    let applied = Migrator::get_applied_migrations(&connection).await?;
    let pending = Migrator::get_pending_migrations(&connection).await?;

    for m in &applied {
        info!("Applied: {}", m.name());
    }
    for m in &pending {
        info!("Pending: {}", m.name());
    }

    info!(
        "{} applied, {} pending",
        applied.len(),
        pending.len()
    );
    Ok(())
}
