//! Token issuance and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::domain::entities::User;
use crate::errors::{AuthError, DomainError};

use super::config::TokenConfig;

/// Issues and verifies HS256 access tokens.
///
/// A token moves through Issued → Verified on each presentation, ending
/// Expired once the embedded expiry passes or Rejected on signature
/// mismatch. Verification is re-run in full every time; nothing is
/// cached between requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;
        // Expiry is exact; the default 60s leeway would keep expired
        // tokens alive past their embedded timestamp.
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
            access_token_ttl_secs: config.access_token_ttl_secs,
        }
    }

    /// Sign a fresh access token for the user: `{sub: id, email}` plus
    /// the standard time-bound claims.
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new(user.id, &user.email, self.access_token_ttl_secs);
        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("token signing failed: {e}"),
            }
        })
    }

    /// Decode and validate a presented token.
    ///
    /// # Errors
    /// [`AuthError::Expired`] past the embedded expiry;
    /// [`AuthError::InvalidToken`] on signature mismatch or a malformed
    /// structure.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken,
            })
    }
}
