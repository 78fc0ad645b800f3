//! Handler for `PATCH /users/me/chain-name`.

use actix_web::{web, HttpResponse};
use validator::Validate;

use hotelier_core::repositories::{PropertyRepository, UserRepository};
use hotelier_core::services::storage::ImageStore;

use crate::dto::UpdateChainNameRequest;
use crate::handlers::error::{domain_error_response, validation_failure_response};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Set the label grouping the caller's properties. Must be set before
/// any property can be created.
pub async fn update_chain_name<U, P, S>(
    state: web::Data<AppState<U, P, S>>,
    user: CurrentUser,
    request: web::Json<UpdateChainNameRequest>,
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
        .update_chain_name(user.0.id, &request.chain_name)
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => domain_error_response(&error),
    }
}
