//! Domain error to HTTP response mapping.
//!
//! Authentication failures are unauthorized responses, validation
//! failures are bad requests with a human-readable reason, and
//! collaborator failures surface as generic server errors. Nothing here
//! is retried; every failure is terminal for the request.

use std::collections::HashMap;

use actix_web::HttpResponse;
use validator::ValidationErrors;

use hotelier_core::errors::{AuthError, DomainError, ValidationError};
use hotelier_shared::types::ErrorResponse;

/// Convert a domain error into its HTTP response.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => {
            let (code, message) = match auth_error {
                AuthError::InvalidCredentials => ("invalid_credentials", "Invalid email or password"),
                AuthError::InvalidToken => ("invalid_token", "Token is invalid"),
                AuthError::Expired => ("token_expired", "Token has expired"),
                AuthError::MalformedClaim => ("malformed_claim", "Token payload is malformed"),
                AuthError::UserNotFound => ("user_not_found", "User no longer exists"),
            };
            tracing::debug!(code, "request rejected as unauthorized");
            HttpResponse::Unauthorized().json(ErrorResponse::new(code, message))
        }

        DomainError::Validation(validation_error) => {
            let code = match validation_error {
                ValidationError::UnknownType { .. } => "unknown_type",
                ValidationError::MissingEmployees => "missing_employees",
                ValidationError::MissingLogoUrl => "missing_logo_url",
                ValidationError::MissingPrice => "missing_price",
                ValidationError::NoChainName => "no_chain_name",
                ValidationError::EmailTaken => "email_taken",
            };
            HttpResponse::BadRequest().json(ErrorResponse::new(code, validation_error.to_string()))
        }

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{resource} not found"),
        )),

        DomainError::Database { .. } | DomainError::Internal { .. } => {
            tracing::error!(error = %error, "request failed with server error");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert DTO validation failures into a bad-request response with
/// field-level details.
pub fn validation_failure_response(errors: &ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    details.insert(
        "validation_errors".to_string(),
        serde_json::json!(errors),
    );

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}
