//! # clientdesk-auth
//!
//! The access-control and session-authentication subsystem: the pure
//! access policy evaluator, the in-memory session store, the
//! authentication service (register / login / logout / check), and
//! password hashing.

pub mod password;
pub mod policy;
pub mod service;
pub mod session;

pub use policy::{AccessDecision, evaluate};
pub use service::AuthService;
pub use session::SessionStore;
