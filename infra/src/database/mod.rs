//! Database connection management.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use hotelier_shared::config::DatabaseConfig;

pub mod mysql;

pub use mysql::{MySqlPropertyRepository, MySqlUserRepository};

/// Build the MySQL connection pool from configuration. Timeouts and
/// retries below this point are sqlx's concern.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await
}

/// Apply the SQL migrations embedded from `migrations/` at the
/// workspace root.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../migrations").run(pool).await
}
