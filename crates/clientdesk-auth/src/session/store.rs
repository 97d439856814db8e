//! In-memory session store.
//!
//! Holds the per-session authentication state keyed by the opaque session
//! handle carried in the client's cookie. Safe for concurrent access from
//! request handlers belonging to different sessions; mutations to the same
//! session are last-write-wins.
//!
//! Expiry is lazy: an entry whose idle time exceeds the configured timeout
//! is removed on the next lookup. There is no background sweeper.

use chrono::{Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use clientdesk_core::config::session::SessionConfig;
use clientdesk_entity::session::SessionData;
use clientdesk_entity::user::User;

/// Concurrent map of bound sessions.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, SessionData>,
    idle_timeout: Duration,
}

impl SessionStore {
    /// Create a session store from configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout: Duration::minutes(config.idle_timeout_minutes as i64),
        }
    }

    /// Bind `session_id` to `user`, replacing any previous binding.
    pub fn bind(&self, session_id: Uuid, user: User) -> SessionData {
        let data = SessionData::bind(user);
        self.sessions.insert(session_id, data.clone());
        data
    }

    /// Look up a session, applying lazy expiry and touching `last_access`.
    ///
    /// Returns `None` for unknown handles and for sessions whose idle time
    /// exceeded the timeout (those are removed).
    pub fn get(&self, session_id: Uuid) -> Option<SessionData> {
        let now = Utc::now();

        match self.sessions.get_mut(&session_id) {
            Some(mut entry) => {
                if now - entry.last_access > self.idle_timeout {
                    drop(entry);
                    self.sessions.remove(&session_id);
                    return None;
                }
                entry.last_access = now;
                Some(entry.clone())
            }
            None => None,
        }
    }

    /// Replace the cached user snapshot and role for a bound session.
    ///
    /// No-op if the session is not bound.
    pub fn refresh(&self, session_id: Uuid, user: User) {
        if let Some(mut entry) = self.sessions.get_mut(&session_id) {
            entry.role = user.role.clone();
            entry.user = user;
            entry.last_access = Utc::now();
        }
    }

    /// Discard all state for a session. Returns whether it was bound.
    pub fn invalidate(&self, session_id: Uuid) -> bool {
        self.sessions.remove(&session_id).is_some()
    }

    /// Number of currently bound sessions (expired entries may linger
    /// until their next lookup).
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no bound sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
