use std::error::Error;
use std::process::Command;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Execute the create command
pub async fn execute(name: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    // Use provided name or default from config
    let db_name = name.unwrap_or_else(|| config.name.clone());
    if !is_valid_identifier(&db_name) {
        error!("Refusing to create database with invalid name '{}'", db_name);
        return Err(format!("Invalid database name: {}", db_name).into());
    }

    info!("Creating database: {}", db_name);

    let conn_string = config.server_url();

    if database_exists(&conn_string, &db_name)? {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    let output = Command::new("psql")
        .arg(&conn_string)
        .arg("-c")
        .arg(format!("CREATE DATABASE {}", db_name))
        .output()
        .map_err(|e| {
            error!("Failed to execute psql command: {}", e);
            e
        })?;

    if output.status.success() {
        info!("Database '{}' created successfully", db_name);
        Ok(())
    } else {
        let error_msg = String::from_utf8_lossy(&output.stderr);
        error!("Failed to create database: {}", error_msg);
        Err(format!("Failed to create database: {}", error_msg).into())
    }
}

fn database_exists(conn_string: &str, db_name: &str) -> Result<bool, Box<dyn Error>> {
    let output = Command::new("psql")
        .arg(conn_string)
        .arg("-t")
        .arg("-c")
        .arg(format!(
            "SELECT 1 FROM pg_database WHERE datname = '{}'",
            db_name
        ))
        .output()
        .map_err(|e| {
            error!("Failed to check if database exists: {}", e);
            e
        })?;

    Ok(String::from_utf8_lossy(&output.stdout).trim() == "1")
}

/// Database names are interpolated into SQL, so only plain identifiers pass
fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_validation() {
        assert!(is_valid_identifier("techfinder"));
        assert!(is_valid_identifier("techfinder_test_1"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1techfinder"));
        assert!(!is_valid_identifier("tech; DROP DATABASE x"));
    }
}
