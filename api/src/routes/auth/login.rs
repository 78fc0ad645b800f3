//! Handler for `POST /auth/login`.

use actix_web::{web, HttpResponse};

use hotelier_core::repositories::{PropertyRepository, UserRepository};
use hotelier_core::services::storage::ImageStore;

use crate::dto::LoginRequest;
use crate::handlers::error::domain_error_response;
use crate::state::AppState;

/// Validate a credential pair and return a signed access token.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: unknown email or wrong password
/// - 500 Internal Server Error: database failure
pub async fn login<U, P, S>(
    state: web::Data<AppState<U, P, S>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    S: ImageStore + 'static,
{
    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => domain_error_response(&error),
    }
}
