//! User management request DTOs.

use serde::Deserialize;
use validator::Validate;

/// `POST /users` body.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

/// `PATCH /users/me/chain-name` body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChainNameRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub chain_name: String,
}
