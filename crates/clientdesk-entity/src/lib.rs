//! # clientdesk-entity
//!
//! Domain entity models for ClientDesk: users, clients, students, and
//! the per-connection session record.

pub mod client;
pub mod session;
pub mod student;
pub mod user;
