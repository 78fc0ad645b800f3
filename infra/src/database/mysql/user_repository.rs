//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use hotelier_core::domain::entities::{NewUser, User};
use hotelier_core::errors::DomainError;
use hotelier_core::repositories::UserRepository;

/// MySQL-backed user store. Ids come from the table's auto-increment;
/// email uniqueness is enforced by both the service-level check and the
/// unique index.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(db_err("id"))?,
            email: row.try_get("email").map_err(db_err("email"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(db_err("password_hash"))?,
            chain_name: row.try_get("chain_name").map_err(db_err("chain_name"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(db_err("updated_at"))?,
        })
    }
}

fn db_err(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Database {
        message: format!("failed to read column {column}: {e}"),
    }
}

const USER_COLUMNS: &str = "id, email, password_hash, chain_name, created_at, updated_at";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ? LIMIT 1");
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to find user by email: {e}"),
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? LIMIT 1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to find user by id: {e}"),
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS present")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to check email existence: {e}"),
            })?;

        let present: i64 = row.try_get("present").map_err(db_err("present"))?;
        Ok(present == 1)
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (email, password_hash, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("failed to create user: {e}"),
        })?;

        Ok(User {
            id: result.last_insert_id() as i64,
            email: user.email,
            password_hash: user.password_hash,
            chain_name: None,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_chain_name(&self, id: i64, chain_name: &str) -> Result<User, DomainError> {
        sqlx::query("UPDATE users SET chain_name = ?, updated_at = ? WHERE id = ?")
            .bind(chain_name)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to update chain name: {e}"),
            })?;

        // Affected-row counts are unreliable here (MySQL reports 0 when
        // the value is unchanged), so re-read to distinguish a missing
        // user from a no-op update.
        self.find_by_id(id).await?.ok_or(DomainError::NotFound {
            resource: "User".to_string(),
        })
    }
}
