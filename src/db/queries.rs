//! Database Queries
//!
//! Parameterized reads and writes against the settings table.

use rusqlite::{params, Connection, OptionalExtension};

use super::DbResult;

/// Read the raw value stored under `key`
pub fn get_setting(conn: &Connection, key: &str) -> DbResult<Option<Vec<u8>>> {
    let value = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [key],
            |row| row.get::<_, Vec<u8>>(0),
        )
        .optional()?;

    Ok(value)
}

/// Insert or replace the value stored under `key`
pub fn put_setting(conn: &Connection, key: &str, value: &[u8]) -> DbResult<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#,
        params![key, value],
    )?;

    Ok(())
}
