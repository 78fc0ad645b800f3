//! Handler for `GET /hotels`.

use actix_web::{web, HttpResponse};

use hotelier_core::repositories::{PropertyRepository, UserRepository};
use hotelier_core::services::storage::ImageStore;

use crate::handlers::error::domain_error_response;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// List the caller's properties. Never returns another owner's records;
/// order is unspecified.
pub async fn list_properties<U, P, S>(
    state: web::Data<AppState<U, P, S>>,
    user: CurrentUser,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    S: ImageStore + 'static,
{
    match state.property_service.list(user.0.id).await {
        Ok(properties) => HttpResponse::Ok().json(properties),
        Err(error) => domain_error_response(&error),
    }
}
