//! Settings Store
//!
//! Flat key-value storage for persisted blobs. The credential store only
//! ever talks to this trait, so the SQLite database can be swapped for an
//! in-memory double in tests.

use crate::db::{self, Database};

use super::{StoreError, StoreResult};

/// Key-value blob storage
pub trait SettingsStore {
    /// Read the blob under `key`, `None` if nothing was ever written
    fn read_blob(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replace the blob under `key`
    fn write_blob(&mut self, key: &str, value: &[u8]) -> StoreResult<()>;
}

impl SettingsStore for Database {
    fn read_blob(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        db::get_setting(self.conn(), key).map_err(|e| StoreError::StorageReadFailed(e.to_string()))
    }

    fn write_blob(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        db::put_setting(self.conn(), key, value)
            .map_err(|e| StoreError::StorageWriteFailed(e.to_string()))
    }
}
