//! Store manager that dispatches to the configured record store provider.

use std::sync::Arc;

use tracing::info;

use clientdesk_core::config::DatabaseConfig;
use clientdesk_core::error::AppError;
use clientdesk_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryClientStore, MemoryUserDirectory};
use crate::migration;
use crate::repositories::client::PgClientStore;
use crate::repositories::user::PgUserDirectory;
use crate::repositories::{ClientStore, UserDirectory};

/// Holds the record store capabilities behind the configured provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// User directory.
    pub users: Arc<dyn UserDirectory>,
    /// Client store.
    pub clients: Arc<dyn ClientStore>,
}

impl StoreManager {
    /// Create a store manager from configuration.
    ///
    /// The `"postgres"` provider connects a pool and runs migrations; the
    /// `"memory"` provider starts empty.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL record stores");
                let db = DatabasePool::connect(config).await?;
                migration::run_migrations(db.pool()).await?;
                Ok(Self {
                    users: Arc::new(PgUserDirectory::new(db.pool().clone())),
                    clients: Arc::new(PgClientStore::new(db.pool().clone())),
                })
            }
            "memory" => {
                info!("Initializing in-memory record stores");
                Ok(Self {
                    users: Arc::new(MemoryUserDirectory::new()),
                    clients: Arc::new(MemoryClientStore::new()),
                })
            }
            other => Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }
}
