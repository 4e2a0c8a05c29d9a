//! User repository for identity records.
//!
//! Users are created at registration and never updated or deleted; the only
//! lookups are by username (registration uniqueness check and login).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::auth::models::{NewUser, User};
use crate::errors::{Error, Result};
use crate::storage::DbPool;

#[derive(Debug, Clone, FromRow)]
struct UserRow {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: crate::domain::UserId::from_string(self.id),
            username: self.username,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user. Fails with a conflict error when the username is
    /// already taken.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Get a user by username, without the password hash.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Get a user with their password hash for authentication.
    async fn get_user_with_password(&self, username: &str) -> Result<Option<(User, String)>>;
}

#[derive(Debug, Clone)]
pub struct SqlxUserRepository {
    pool: DbPool,
}

impl SqlxUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        sqlx::query(
            "INSERT INTO users (id, username, password_hash, created_at) \
             VALUES ($1, $2, $3, CURRENT_TIMESTAMP)",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            // The UNIQUE constraint backs the registration-time uniqueness
            // check against concurrent registrations.
            if err
                .as_database_error()
                .map(|db_err| db_err.is_unique_violation())
                .unwrap_or(false)
            {
                Error::conflict("Username already taken.")
            } else {
                Error::database(err, "Failed to insert user")
            }
        })?;

        let row: UserRow =
            sqlx::query_as("SELECT id, username, password_hash, created_at FROM users WHERE id = $1")
                .bind(&user.id)
                .fetch_one(&self.pool)
                .await
                .map_err(|err| Error::database(err, "Failed to fetch created user"))?;

        Ok(row.into_user())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| Error::database(err, "Failed to look up user by username"))?;

        Ok(row.map(UserRow::into_user))
    }

    async fn get_user_with_password(&self, username: &str) -> Result<Option<(User, String)>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| Error::database(err, "Failed to fetch user for authentication"))?;

        Ok(row.map(|row| {
            let hash = row.password_hash.clone();
            (row.into_user(), hash)
        }))
    }
}
