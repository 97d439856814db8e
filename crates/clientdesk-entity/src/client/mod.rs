//! Client entity.

pub mod model;

pub use model::{Client, NewClient};
