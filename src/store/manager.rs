//! Credential Store
//!
//! Owns the in-memory list of logins and keeps the settings store in sync.
//!
//! The list is loaded once at construction. Every mutation rewrites the
//! whole JSON array under [`LOGINS_KEY`] before returning; if that write
//! fails the in-memory list still holds the change so the caller can retry
//! with [`CredentialStore::flush`].

use super::search;
use super::{password_gen, LoginRecord, SettingsStore, StoreError, StoreResult};

/// Settings key holding the serialized login list
pub const LOGINS_KEY: &str = "Logins";

pub struct CredentialStore<S: SettingsStore> {
    settings: S,
    logins: Vec<LoginRecord>,
}

impl<S: SettingsStore> CredentialStore<S> {
    /// Create a store over `settings` and load whatever it holds
    pub fn new(settings: S) -> Self {
        let mut store = Self {
            settings,
            logins: Vec::new(),
        };
        store.reload();
        store
    }

    /// Read and decode the persisted list, surfacing failures
    pub fn try_load(&self) -> StoreResult<Vec<LoginRecord>> {
        let Some(blob) = self.settings.read_blob(LOGINS_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_slice(&blob).map_err(|e| StoreError::DecodeFailed(e.to_string()))
    }

    /// Read the persisted list, falling back to empty on any failure
    pub fn load(&self) -> Vec<LoginRecord> {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable login list");
            Vec::new()
        })
    }

    /// Replace the in-memory list with the persisted one
    pub fn reload(&mut self) {
        self.logins = self.load();
        tracing::debug!(count = self.logins.len(), "Logins loaded");
    }

    /// Write the current in-memory list to the settings store
    pub fn flush(&mut self) -> StoreResult<()> {
        let blob = serde_json::to_vec(&self.logins)
            .map_err(|e| StoreError::StorageWriteFailed(e.to_string()))?;
        self.settings.write_blob(LOGINS_KEY, &blob)?;
        tracing::debug!(count = self.logins.len(), bytes = blob.len(), "Logins saved");
        Ok(())
    }

    /// Append a login and persist. Inputs are stored exactly as given.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> StoreResult<()> {
        let record = LoginRecord::new(name, email, password);
        tracing::info!(name = %record.name, "Login created");
        self.logins.push(record);
        self.flush()
    }

    /// Remove the login at `index` and persist
    pub fn delete_at(&mut self, index: usize) -> StoreResult<LoginRecord> {
        let len = self.logins.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let removed = self.logins.remove(index);
        tracing::info!(index, name = %removed.name, "Login deleted");
        self.flush()?;
        Ok(removed)
    }

    /// Remove every login and persist the empty list
    pub fn delete_all(&mut self) -> StoreResult<()> {
        let count = self.logins.len();
        self.logins.clear();
        tracing::info!(count, "All logins deleted");
        self.flush()
    }

    /// A fresh random password candidate; does not touch stored state
    pub fn generate_password(&self) -> String {
        password_gen::generate_password()
    }

    /// Logins whose name contains `query`, ignoring case
    pub fn filter(&self, query: &str) -> Vec<&LoginRecord> {
        search::filter(&self.logins, query)
    }

    /// Stored positions of the logins [`filter`](Self::filter) returns
    pub fn filter_indices(&self, query: &str) -> Vec<usize> {
        search::filter_indices(&self.logins, query)
    }

    pub fn logins(&self) -> &[LoginRecord] {
        &self.logins
    }

    pub fn get(&self, index: usize) -> Option<&LoginRecord> {
        self.logins.get(index)
    }

    pub fn len(&self) -> usize {
        self.logins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, DatabaseConfig};
    use crate::store::password_gen::{ALPHABET, PASSWORD_LENGTH};
    use crate::store::settings::doubles::{FlakySettings, MemorySettings};

    fn setup_store() -> CredentialStore<MemorySettings> {
        CredentialStore::new(MemorySettings::default())
    }

    fn names<S: SettingsStore>(store: &CredentialStore<S>) -> Vec<String> {
        store.logins().iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = setup_store();
        assert!(store.is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_create_persists_in_order() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();
        store.create("Bob", "b@x.com", "p2").unwrap();
        store.create("Carol", "c@x.com", "p3").unwrap();

        assert_eq!(store.load(), store.logins().to_vec());
        assert_eq!(names(&store), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_create_is_permissive() {
        let mut store = setup_store();
        store.create("  padded  ", "not an email", "").unwrap();
        store.create("  padded  ", "not an email", "").unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], LoginRecord::new("  padded  ", "not an email", ""));
    }

    #[test]
    fn test_persisted_format() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();

        let blob = store.settings.entries.get(LOGINS_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_slice(blob).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "name": "Alice", "email": "a@x.com", "password": "p1" }])
        );
    }

    #[test]
    fn test_every_mutation_writes() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();
        store.create("Bob", "b@x.com", "p2").unwrap();
        store.delete_at(0).unwrap();
        store.delete_all().unwrap();

        assert_eq!(store.settings.writes, 4);
    }

    #[test]
    fn test_loads_existing_state_on_construction() {
        let blob = br#"[{"name":"Zed","email":"z@x.com","password":"zz"}]"#;
        let store = CredentialStore::new(MemorySettings::with_blob(LOGINS_KEY, blob));

        assert_eq!(store.logins(), &[LoginRecord::new("Zed", "z@x.com", "zz")]);
    }

    #[test]
    fn test_corrupted_blob_loads_empty() {
        let store = CredentialStore::new(MemorySettings::with_blob(LOGINS_KEY, b"not json"));

        assert!(store.is_empty());
        assert!(store.load().is_empty());
        assert!(matches!(store.try_load(), Err(StoreError::DecodeFailed(_))));
    }

    #[test]
    fn test_wrong_shape_blob_loads_empty() {
        let blob = br#"{"name":"Zed","email":"z@x.com","password":"zz"}"#;
        let store = CredentialStore::new(MemorySettings::with_blob(LOGINS_KEY, blob));

        assert!(store.is_empty());
        assert!(matches!(store.try_load(), Err(StoreError::DecodeFailed(_))));
    }

    #[test]
    fn test_invalid_utf8_blob_loads_empty() {
        let blob = [0xff, 0xfe, 0x5b];
        let store = CredentialStore::new(MemorySettings::with_blob(LOGINS_KEY, &blob));
        assert!(store.is_empty());
    }

    #[test]
    fn test_read_failure_loads_empty() {
        let settings = FlakySettings {
            fail_reads: true,
            ..Default::default()
        };
        let store = CredentialStore::new(settings);

        assert!(store.is_empty());
        assert!(matches!(store.try_load(), Err(StoreError::StorageReadFailed(_))));
    }

    #[test]
    fn test_delete_at() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();
        store.create("Bob", "b@x.com", "p2").unwrap();
        store.create("Carol", "c@x.com", "p3").unwrap();

        let removed = store.delete_at(1).unwrap();

        assert_eq!(removed.name, "Bob");
        assert_eq!(names(&store), vec!["Alice", "Carol"]);
        assert_eq!(store.load(), store.logins().to_vec());
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();
        let writes_before = store.settings.writes;

        let err = store.delete_at(1).unwrap_err();

        assert!(matches!(err, StoreError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(), vec![LoginRecord::new("Alice", "a@x.com", "p1")]);
        assert_eq!(store.settings.writes, writes_before);
    }

    #[test]
    fn test_delete_at_on_empty_store() {
        let mut store = setup_store();
        let err = store.delete_at(0).unwrap_err();
        assert!(matches!(err, StoreError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_delete_all() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();
        store.create("Bob", "b@x.com", "p2").unwrap();

        store.delete_all().unwrap();

        assert!(store.is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_write_failure_is_surfaced_and_keeps_mutation() {
        let mut store = CredentialStore::new(FlakySettings::default());
        store.create("Alice", "a@x.com", "p1").unwrap();

        store.settings.fail_writes = true;
        let err = store.create("Bob", "b@x.com", "p2").unwrap_err();

        assert!(matches!(err, StoreError::StorageWriteFailed(_)));
        assert_eq!(names(&store), vec!["Alice", "Bob"]);
        assert_eq!(store.load().len(), 1);

        store.settings.fail_writes = false;
        store.flush().unwrap();
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_generate_password_has_no_side_effect() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();
        let writes_before = store.settings.writes;

        let password = store.generate_password();

        assert_eq!(password.chars().count(), PASSWORD_LENGTH);
        assert!(password.chars().all(|c| ALPHABET.contains(c)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.settings.writes, writes_before);
    }

    #[test]
    fn test_filter_through_store() {
        let mut store = setup_store();
        store.create("john.doe", "j@x.com", "p1").unwrap();
        store.create("Alice", "a@x.com", "p2").unwrap();

        let results = store.filter("JOHN");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "john.doe");
        assert_eq!(store.filter("").len(), 2);
        assert_eq!(store.filter_indices("alice"), vec![1]);
    }

    #[test]
    fn test_alice_bob_scenario() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();
        store.create("Bob", "b@x.com", "p2").unwrap();

        let found = store.filter("bo");
        assert_eq!(found, vec![&LoginRecord::new("Bob", "b@x.com", "p2")]);

        store.delete_at(0).unwrap();

        assert_eq!(store.load(), vec![LoginRecord::new("Bob", "b@x.com", "p2")]);
    }

    #[test]
    fn test_reload_after_external_write() {
        let mut store = setup_store();
        store.create("Alice", "a@x.com", "p1").unwrap();
        store
            .settings
            .write_blob(LOGINS_KEY, br#"[{"name":"Other","email":"o@x.com","password":"o"}]"#)
            .unwrap();

        store.reload();

        assert_eq!(names(&store), vec!["Other"]);
    }

    #[test]
    fn test_roundtrip_through_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logins.db");

        {
            let db = Database::open(DatabaseConfig::with_path(&path)).unwrap();
            let mut store = CredentialStore::new(db);
            store.create("Alice", "a@x.com", "p1").unwrap();
            store.create("Bob", "b@x.com", "§±<>").unwrap();
        }

        let db = Database::open(DatabaseConfig::with_path(&path)).unwrap();
        let store = CredentialStore::new(db);
        assert_eq!(
            store.logins(),
            &[
                LoginRecord::new("Alice", "a@x.com", "p1"),
                LoginRecord::new("Bob", "b@x.com", "§±<>"),
            ]
        );
    }

    #[test]
    fn test_sqlite_write_failure() {
        let db = Database::open_in_memory().unwrap();
        let mut store = CredentialStore::new(db);
        store.settings.conn().execute_batch("DROP TABLE settings;").unwrap();

        let err = store.create("Alice", "a@x.com", "p1").unwrap_err();

        assert!(matches!(err, StoreError::StorageWriteFailed(_)));
        assert_eq!(store.len(), 1);
    }
}
