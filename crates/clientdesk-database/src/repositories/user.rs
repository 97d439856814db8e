//! PostgreSQL user directory implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use clientdesk_core::error::{AppError, ErrorKind};
use clientdesk_core::result::AppResult;
use clientdesk_entity::user::{NewUser, User};

use super::UserDirectory;

/// User directory backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    /// Create a new user directory over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (login, password, role, full_name, email) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&user.login)
        .bind(&user.password)
        .bind(&user.role)
        .bind(&user.full_name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Unique violation on login is the store-level backstop.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict(format!("Login '{}' already exists", user.login))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by login", e)
            })
    }
}
