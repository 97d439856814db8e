//! PostgreSQL client store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use clientdesk_core::error::{AppError, ErrorKind};
use clientdesk_core::result::AppResult;
use clientdesk_entity::client::{Client, NewClient};

use super::ClientStore;

/// Client store backed by the `clients` table.
#[derive(Debug, Clone)]
pub struct PgClientStore {
    pool: PgPool,
}

impl PgClientStore {
    /// Create a new client store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for PgClientStore {
    async fn create(&self, client: NewClient) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            "INSERT INTO clients (full_name, contacts) VALUES ($1, $2) RETURNING *",
        )
        .bind(&client.full_name)
        .bind(&client.contacts)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create client", e))
    }

    async fn read(&self, id: i32) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read client", e))
    }

    async fn update(&self, client: &Client) -> AppResult<bool> {
        let result = sqlx::query("UPDATE clients SET full_name = $1, contacts = $2 WHERE id = $3")
            .bind(&client.full_name)
            .bind(&client.contacts)
            .bind(client.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update client", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete client", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_all(&self) -> AppResult<Vec<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clients", e))
    }
}
