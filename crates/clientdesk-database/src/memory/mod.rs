//! In-memory record store implementations.
//!
//! Used by the `"memory"` provider for tests and local development.
//! Backed by `DashMap` so concurrent request handlers can read and write
//! without external coordination.

pub mod client;
pub mod user;

pub use client::MemoryClientStore;
pub use user::MemoryUserDirectory;
