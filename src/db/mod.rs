//! Database Module
//!
//! SQLite-backed key-value settings table.

pub mod connection;
pub mod queries;
pub mod schema;

use thiserror::Error;

/// Database errors
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DbResult<T> = Result<T, DbError>;

// Re-exports
pub use connection::{Database, DatabaseConfig};
pub use queries::{get_setting, put_setting};
