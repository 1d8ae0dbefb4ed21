//! Login Record
//!
//! One saved login as it appears in the persisted JSON array.

use serde::{Deserialize, Serialize};

/// A stored login. Identity is its position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRecord {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl LoginRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
