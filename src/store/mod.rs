//! Login Store
//!
//! The ordered list of saved logins and its persistence in the settings
//! store.

pub mod login;
pub mod manager;
pub mod password_gen;
pub mod search;
pub mod settings;

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Stored logins could not be decoded: {0}")]
    DecodeFailed(String),

    #[error("Index {index} is out of range for {len} logins")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to save logins: {0}")]
    StorageWriteFailed(String),

    #[error("Failed to read logins: {0}")]
    StorageReadFailed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

// Re-exports
pub use login::LoginRecord;
pub use manager::CredentialStore;
pub use settings::SettingsStore;
