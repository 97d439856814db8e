//! Student entity model.
//!
//! Students live only in the in-memory registry; there is no persisted
//! table behind them.

use serde::{Deserialize, Serialize};

/// A student record held by the in-memory registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Registry-assigned identifier.
    pub id: i32,
    /// Student name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Group letter.
    pub group: String,
}

/// Data required to add a student to the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    /// Student name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Group letter.
    pub group: String,
}
