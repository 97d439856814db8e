//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user in the ClientDesk directory.
///
/// `role` is an open string tag (`"admin"` and `"user"` are the observed
/// values); no enumeration is enforced. The wire format is camelCase to
/// match the original JSON surface.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, assigned by the directory on creation.
    pub id: i32,
    /// Unique login name.
    pub login: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    #[serde(default)]
    pub password: String,
    /// Role tag.
    pub role: String,
    /// Display name.
    pub full_name: String,
    /// Contact email, no uniqueness constraint.
    pub email: String,
}

/// Data required to create a new user. The directory assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Desired login name.
    pub login: String,
    /// Pre-hashed password.
    pub password: String,
    /// Role tag.
    pub role: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
}
