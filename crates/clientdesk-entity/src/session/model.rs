//! Per-connection session record.

use chrono::{DateTime, Utc};

use crate::user::User;

/// Authentication state bound to one session handle.
///
/// An entry exists in the session store only while a user is bound to it;
/// an absent entry means the caller is anonymous. `role` is a denormalized
/// copy of the user's role, refreshed on every login and auth check so it
/// never goes stale beyond one request.
#[derive(Debug, Clone)]
pub struct SessionData {
    /// Snapshot of the authenticated user as of the last refresh.
    pub user: User,
    /// Cached copy of the user's role.
    pub role: String,
    /// When the session was bound.
    pub created_at: DateTime<Utc>,
    /// Last time the session was read or written through the store.
    pub last_access: DateTime<Utc>,
}

impl SessionData {
    /// Create a freshly-bound session record for `user`.
    pub fn bind(user: User) -> Self {
        let now = Utc::now();
        let role = user.role.clone();
        Self {
            user,
            role,
            created_at: now,
            last_access: now,
        }
    }
}
