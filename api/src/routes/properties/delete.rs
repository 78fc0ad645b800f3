//! Handler for `DELETE /hotels/{id}`.

use actix_web::{web, HttpResponse};

use hotelier_core::repositories::{PropertyRepository, UserRepository};
use hotelier_core::services::storage::ImageStore;

use crate::handlers::error::domain_error_response;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Delete one of the caller's properties.
///
/// Returns 200 whether or not the id matched one of the caller's
/// records: the delete is scoped to the owner and a mismatch simply
/// matches nothing.
pub async fn delete_property<U, P, S>(
    state: web::Data<AppState<U, P, S>>,
    user: CurrentUser,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    S: ImageStore + 'static,
{
    let id = path.into_inner();
    match state.property_service.delete(id, user.0.id).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => domain_error_response(&error),
    }
}
