//! Authentication request DTOs.

use serde::Deserialize;

/// `POST /auth/login` body. No format validation here — an email that
/// was never registered fails the credential check the same way a
/// malformed one does.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
