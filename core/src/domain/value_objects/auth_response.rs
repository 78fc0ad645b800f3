//! Login response value object.

use serde::{Deserialize, Serialize};

/// Returned by a successful login: the signed bearer token the client
/// attaches to subsequent requests. No session state is retained
/// server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
}
