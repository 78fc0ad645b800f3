//! Handler for `POST /hotels`.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use hotelier_core::repositories::{PropertyRepository, UserRepository};
use hotelier_core::services::storage::ImageStore;

use crate::handlers::error::domain_error_response;
use crate::middleware::CurrentUser;
use crate::state::AppState;

use super::form::parse_property_form;

/// Create a property for the caller from a multipart form.
///
/// Text fields carry the property attributes (`location` as a GeoJSON
/// string); up to five image files arrive under `images` and are stored
/// before validation completes.
///
/// # Response
/// - 201 Created: the stored property including its generated id
/// - 400 Bad Request: unusable form, unknown type, missing
///   type-dependent fields, or no chain name set
/// - 401 Unauthorized: missing or invalid bearer token
pub async fn create_property<U, P, S>(
    state: web::Data<AppState<U, P, S>>,
    user: CurrentUser,
    payload: Multipart,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    S: ImageStore + 'static,
{
    let input =
        match parse_property_form(payload, state.image_store.as_ref(), &state.storage).await {
            Ok(input) => input,
            Err(error) => return error.to_response(),
        };

    match state.property_service.create(input, user.0.id).await {
        Ok(property) => HttpResponse::Created().json(property),
        Err(error) => domain_error_response(&error),
    }
}
