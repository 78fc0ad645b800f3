//! Configuration for the token service.

use crate::domain::entities::token::DEFAULT_ACCESS_TOKEN_TTL_SECS;

/// Configuration for the token service.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HS256 signing secret.
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_ttl_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
        }
    }
}
