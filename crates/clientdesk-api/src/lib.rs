//! # clientdesk-api
//!
//! HTTP API layer for ClientDesk built on Axum.
//!
//! Provides the REST endpoints, the request gate middleware that enforces
//! the access policy, request logging, extractors, and DTOs.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
