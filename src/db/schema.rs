//! Database Schema
//!
//! A single flat table of settings keyed by name.

use rusqlite::Connection;

use super::DbResult;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value BLOB NOT NULL
        );
        "#,
    )?;

    Ok(())
}
