//! In-memory user directory.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use clientdesk_core::error::AppError;
use clientdesk_core::result::AppResult;
use clientdesk_entity::user::{NewUser, User};

use crate::repositories::UserDirectory;

/// User directory held in a concurrent map, keyed by id.
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    users: DashMap<i32, User>,
    next_id: AtomicI32,
}

impl MemoryUserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user record directly, bypassing the service layer.
    ///
    /// Exists so tests can simulate out-of-band deletion; the
    /// authentication subsystem itself never deletes users.
    pub fn remove(&self, id: i32) -> Option<User> {
        self.users.remove(&id).map(|(_, user)| user)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        // Insert-time uniqueness backstop, mirroring the DB constraint.
        if self.users.iter().any(|u| u.login == user.login) {
            return Err(AppError::conflict(format!(
                "Login '{}' already exists",
                user.login
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            login: user.login,
            password: user.password,
            role: user.role,
            full_name: user.full_name,
            email: user.email,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.login == login)
            .map(|u| u.clone()))
    }
}
