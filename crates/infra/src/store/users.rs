//! Registered users.

use std::sync::RwLock;

use intakeflow_auth::{normalize_username, User};
use intakeflow_core::{DomainError, UserId};

/// Store of registered users.
pub trait UserStore: Send + Sync {
    /// Insert a new user; `Conflict` when the username is taken.
    fn insert(&self, user: User) -> Result<(), DomainError>;

    fn find_by_username(&self, username: &str) -> Option<User>;

    fn get(&self, user_id: UserId) -> Option<User>;
}

/// In-memory user store for dev/test deployments.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: User) -> Result<(), DomainError> {
        let mut users = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("user store lock poisoned"))?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::conflict("user already exists"));
        }
        users.push(user);
        Ok(())
    }

    fn find_by_username(&self, username: &str) -> Option<User> {
        let needle = normalize_username(username);
        let users = self.inner.read().ok()?;
        users.iter().find(|u| u.username == needle).cloned()
    }

    fn get(&self, user_id: UserId) -> Option<User> {
        let users = self.inner.read().ok()?;
        users.iter().find(|u| u.id == user_id).cloned()
    }
}
