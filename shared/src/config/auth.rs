//! Authentication configuration.

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// JWT signing and password-hashing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret for access tokens.
    pub jwt_secret: String,

    /// Access token lifetime in seconds.
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_secs: i64,

    /// bcrypt cost factor for password hashing.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-please-change-in-production"),
            access_token_ttl_secs: default_access_token_ttl(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: env_or_string("JWT_SECRET", &defaults.jwt_secret),
            access_token_ttl_secs: env_or("ACCESS_TOKEN_TTL_SECS", defaults.access_token_ttl_secs),
            bcrypt_cost: env_or("BCRYPT_COST", defaults.bcrypt_cost),
        }
    }
}

fn default_access_token_ttl() -> i64 {
    3600
}

fn default_bcrypt_cost() -> u32 {
    10
}
