//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AuthError;

/// JWT issuer.
pub const JWT_ISSUER: &str = "hotelier";

/// Default access token lifetime (1 hour).
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 3600;

/// The `sub` claim as found on the wire.
///
/// Tokens issued by this service always write the user id as a JSON
/// number, but a presented token is accepted with either a number or a
/// string that parses as a positive integer. Anything else is kept as
/// [`Subject::Other`] so normalization can reject it as a malformed claim
/// instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subject {
    Id(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Subject {
    /// Normalize the claim into a single positive integer user id.
    pub fn normalize(&self) -> Result<i64, AuthError> {
        let id = match self {
            Subject::Id(id) => *id,
            Subject::Text(raw) => raw.trim().parse::<i64>().map_err(|_| AuthError::MalformedClaim)?,
            Subject::Other(_) => return Err(AuthError::MalformedClaim),
        };
        if id <= 0 {
            return Err(AuthError::MalformedClaim);
        }
        Ok(id)
    }
}

impl From<i64> for Subject {
    fn from(id: i64) -> Self {
        Subject::Id(id)
    }
}

/// Claims structure for the JWT payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: Subject,

    /// Login email of the user at issuance time.
    pub email: String,

    /// Issued-at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issuer.
    pub iss: String,
}

impl Claims {
    /// Creates claims for an access token expiring `ttl_secs` from now.
    pub fn new(user_id: i64, email: &str, ttl_secs: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_secs);

        Self {
            sub: Subject::Id(user_id),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }
}
