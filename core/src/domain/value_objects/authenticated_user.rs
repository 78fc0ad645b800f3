//! Authenticated user context, with credential material stripped.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// The user record handed to downstream layers after authorization.
/// Identical to [`User`] minus the password hash, so it is safe to
/// serialize straight into responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_name: Option<String>,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            chain_name: user.chain_name,
        }
    }
}
