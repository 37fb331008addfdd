//! Read-only views over state owned by the backend
//!
//! These types are deserializable so client adapters can hand over the JSON
//! payloads they already receive.

use serde::{Deserialize, Serialize};

/// Authenticated identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }
}

/// Active session as reported by the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    /// Expiry as a unix timestamp in seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn for_user(user: User) -> Self {
        Self {
            user,
            expires_at: None,
        }
    }
}

/// Projection of a `profiles` row onto its `role` column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProfileRow {
    #[serde(default)]
    pub role: Option<String>,
}
