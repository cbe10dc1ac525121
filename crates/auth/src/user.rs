//! User records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use intakeflow_core::{DomainError, UserId};

/// A registered portal user.
///
/// Usernames are stored normalized (trimmed, lowercased) so lookups and
/// uniqueness checks are case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// PHC-formatted Argon2id hash; never the plaintext.
    pub password_hash: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: &str,
        password_hash: String,
        department: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let username = normalize_username(username);
        if username.is_empty() {
            return Err(DomainError::validation("username must not be empty"));
        }

        Ok(Self {
            id: UserId::new(),
            username,
            password_hash,
            department: department.into(),
            created_at: Utc::now(),
        })
    }
}

/// Canonical form used for storage and lookups.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}
