//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle timeout in minutes before a session expires.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: default_idle_timeout(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_idle_timeout() -> u64 {
    30
}

fn default_cookie_name() -> String {
    "clientdesk_session".to_string()
}
