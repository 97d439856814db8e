//! HTTP request handlers.

pub mod auth;
pub mod client;
pub mod health;
pub mod student;
