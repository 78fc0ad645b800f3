//! Handler for `POST /users` (registration).

use actix_web::{web, HttpResponse};
use validator::Validate;

use hotelier_core::repositories::{PropertyRepository, UserRepository};
use hotelier_core::services::storage::ImageStore;

use crate::dto::RegisterRequest;
use crate::handlers::error::{domain_error_response, validation_failure_response};
use crate::state::AppState;

/// Register a new account.
///
/// # Response
/// - 201 Created: the new profile (no credential material)
/// - 400 Bad Request: malformed email, short password, or taken email
pub async fn register<U, P, S>(
    state: web::Data<AppState<U, P, S>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    S: ImageStore + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failure_response(&errors);
    }

    match state
        .user_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(error) => domain_error_response(&error),
    }
}
