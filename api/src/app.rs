//! Application factory.
//!
//! Builds the actix-web application from an [`AppState`] and the dyn
//! authorizer handle the bearer middleware resolves tokens through.
//! Production wires MySQL and the local disk behind the state; tests
//! wire the in-memory mocks.

use std::sync::Arc;

use actix_files::Files;
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use hotelier_core::repositories::{PropertyRepository, UserRepository};
use hotelier_core::services::storage::ImageStore;
use hotelier_shared::types::ErrorResponse;

use crate::middleware::{create_cors, Authorizer, BearerAuth};
use crate::routes::auth::login;
use crate::routes::properties::{create_property, delete_property, list_properties};
use crate::routes::users::{me, register, update_chain_name};
use crate::state::AppState;

/// Create and configure the application with all dependencies.
pub fn create_app<U, P, S>(
    state: web::Data<AppState<U, P, S>>,
    authorizer: web::Data<Arc<dyn Authorizer>>,
    upload_dir: String,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    S: ImageStore + 'static,
{
    let cors = create_cors();

    App::new()
        // Application state
        .app_data(state)
        .app_data(authorizer)
        // Middleware (request logging outermost, then CORS)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Authentication
        .service(web::scope("/auth").route("/login", web::post().to(login::<U, P, S>)))
        // User management: registration is public, everything under /me
        // requires a bearer token
        .service(
            web::scope("/users")
                .route("", web::post().to(register::<U, P, S>))
                .service(
                    web::scope("/me")
                        .wrap(BearerAuth)
                        .route("", web::get().to(me))
                        .route("/chain-name", web::patch().to(update_chain_name::<U, P, S>)),
                ),
        )
        // Properties, scoped to the authenticated caller
        .service(
            web::scope("/hotels")
                .wrap(BearerAuth)
                .route("", web::get().to(list_properties::<U, P, S>))
                .route("", web::post().to(create_property::<U, P, S>))
                .route("/{id}", web::delete().to(delete_property::<U, P, S>)),
        )
        // Stored property images
        .service(Files::new("/uploads", upload_dir))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler.
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "hotelier-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource does not exist",
    ))
}
