//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use clientdesk_auth::service::AuthService;
use clientdesk_auth::session::SessionStore;
use clientdesk_core::config::AppConfig;
use clientdesk_database::registry::StudentRegistry;
use clientdesk_database::repositories::{ClientStore, UserDirectory};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User directory.
    pub users: Arc<dyn UserDirectory>,
    /// Client store.
    pub clients: Arc<dyn ClientStore>,
    /// In-memory student registry.
    pub students: Arc<StudentRegistry>,
    /// Session store.
    pub sessions: Arc<SessionStore>,
    /// Authentication service.
    pub auth: Arc<AuthService>,
}
