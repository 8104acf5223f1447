// Database Module
// Connection pooling, error types and repositories for the TechFinder API

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DbError;
pub use pool::DbPool;
pub use repositories::{MatchedCompany, Repositories};
