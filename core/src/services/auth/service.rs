//! Main authentication service implementation.

use std::sync::Arc;

use crate::domain::value_objects::{AuthResponse, AuthenticatedUser};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Authentication gateway: credential validation on login, token
/// verification and user resolution on every protected request.
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Validate a credential pair and issue a signed access token.
    ///
    /// An unknown email and a password mismatch both surface as
    /// [`AuthError::InvalidCredentials`]; the comparison itself is
    /// delegated to bcrypt. No session state is retained on success.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("password verification failed: {e}"),
            })?;
        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.issue(&user)?;
        tracing::info!(user_id = user.id, "user logged in");

        Ok(AuthResponse { access_token })
    }

    /// Resolve a presented bearer token into an authenticated user.
    ///
    /// Verification is delegated to the token service; the `sub` claim is
    /// then normalized to an integer id and looked up in the user store.
    /// The returned record carries no password hash.
    pub async fn authorize(&self, token: &str) -> DomainResult<AuthenticatedUser> {
        let claims = self.token_service.verify(token)?;
        let user_id = claims.sub.normalize()?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser::from(user))
    }
}
