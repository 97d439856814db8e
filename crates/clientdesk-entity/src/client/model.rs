//! Client entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client record. Pure CRUD data, no policy attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique client identifier, store-assigned.
    pub id: i32,
    /// Client display name.
    pub full_name: String,
    /// Free-form contact information.
    pub contacts: String,
}

/// Data required to create a new client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    /// Client display name.
    pub full_name: String,
    /// Free-form contact information.
    pub contacts: String,
}
