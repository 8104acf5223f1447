use clap::{Parser, Subcommand};
use std::error::Error;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

/// TechFinder database management CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database with psql if it does not exist
    Create {
        /// Database name (defaults to the one in DATABASE_URL)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Apply pending migrations
    Migrate {
        /// Number of migrations to apply (all if not specified)
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Revert applied migrations, newest first
    Rollback {
        /// Number of migrations to revert
        #[arg(short, long, default_value_t = 1)]
        steps: u32,
    },
    /// Drop every table and re-apply all migrations
    Reset {
        /// Required, since this deletes all marketplace data
        #[arg(long)]
        yes: bool,
    },
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Create { name } => commands::create::execute(name).await?,
        Commands::Migrate { steps } => commands::migrate::execute(steps).await?,
        Commands::Rollback { steps } => commands::migrate::rollback(steps).await?,
        Commands::Reset { yes } => {
            if !yes {
                return Err("reset drops all tables; re-run with --yes to confirm".into());
            }
            commands::migrate::reset().await?
        }
        Commands::Status => commands::migrate::status().await?,
    }

    Ok(())
}
