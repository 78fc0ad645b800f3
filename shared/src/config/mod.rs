//! Application configuration.
//!
//! Each section is a plain struct with sensible development defaults that
//! can be overridden through environment variables. The binary calls
//! [`AppConfig::from_env`] once at startup after loading `.env`.

mod auth;
mod database;
mod server;
mod storage;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables, falling
    /// back to the per-section defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or unparseable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read an environment variable as a string with a default.
pub(crate) fn env_or_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
