//! # clientdesk-database
//!
//! Record store capabilities for ClientDesk: the `UserDirectory` and
//! `ClientStore` traits, their PostgreSQL and in-memory implementations,
//! provider dispatch, connection pool management, and the in-memory
//! student registry.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod registry;
pub mod repositories;

pub use connection::DatabasePool;
pub use provider::StoreManager;
pub use registry::StudentRegistry;
pub use repositories::{ClientStore, UserDirectory};
