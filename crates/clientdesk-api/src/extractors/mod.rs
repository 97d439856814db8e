//! Request extractors.

pub mod session;

pub use session::session_id;
