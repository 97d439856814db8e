//! Record store capabilities and their PostgreSQL implementations.
//!
//! The traits are the seam between the business logic and storage: the
//! authentication service and the HTTP handlers consume `Arc<dyn …>` and
//! never know which provider backs them.

pub mod client;
pub mod user;

use async_trait::async_trait;

use clientdesk_core::result::AppResult;
use clientdesk_entity::client::{Client, NewClient};
use clientdesk_entity::user::{NewUser, User};

/// Abstract store of user records, keyed by id and by login.
///
/// Login lookups are case-sensitive exact matches. Uniqueness of logins
/// is pre-checked by the authentication service; implementations enforce
/// it again at insert time as the real backstop against races.
#[async_trait]
pub trait UserDirectory: std::fmt::Debug + Send + Sync {
    /// Insert a new user and return it with its assigned id.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Look up a user by primary key.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Look up a user by login.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;
}

/// Abstract store of client records.
#[async_trait]
pub trait ClientStore: std::fmt::Debug + Send + Sync {
    /// Insert a new client and return it with its assigned id.
    async fn create(&self, client: NewClient) -> AppResult<Client>;

    /// Look up a client by primary key.
    async fn read(&self, id: i32) -> AppResult<Option<Client>>;

    /// Update an existing client. Returns `false` if the id is unknown.
    async fn update(&self, client: &Client) -> AppResult<bool>;

    /// Delete a client by id. Returns `false` if the id is unknown.
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// List all clients.
    async fn get_all(&self) -> AppResult<Vec<Client>>;
}
