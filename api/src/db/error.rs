// Error types for database operations

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database query error: {0}")]
    QueryError(String),

    /// A unique or foreign key constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<DbErr> for DbError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return DbError::ConstraintViolation(msg);
            }
            _ => {}
        }

        match err {
            DbErr::Conn(e) => DbError::ConnectionError(e.to_string()),
            other => DbError::QueryError(other.to_string()),
        }
    }
}
