//! Domain-specific error types.
//!
//! Authentication failures surface as unauthorized responses, validation
//! failures as bad requests; persistence failures are propagated
//! unmodified as generic server errors. No error in this system is
//! automatically retried.

use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or password mismatch. The two cases are deliberately
    /// indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bad signature or malformed token structure.
    #[error("Invalid token")]
    InvalidToken,

    /// The token's embedded expiry has passed.
    #[error("Token expired")]
    Expired,

    /// The `sub` claim is neither an integer nor a string parseable as a
    /// positive integer.
    #[error("Malformed token claim")]
    MalformedClaim,

    /// The token verified but its subject no longer exists.
    #[error("User not found")]
    UserNotFound,
}

/// Input validation errors for registration and property creation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown property type: {value}")]
    UnknownType { value: String },

    #[error("Hotels require an employee count")]
    MissingEmployees,

    #[error("Hotels require a logo URL")]
    MissingLogoUrl,

    #[error("This property type requires a price")]
    MissingPrice,

    #[error("A chain name must be set before creating properties")]
    NoChainName,

    #[error("Email is already registered")]
    EmailTaken,
}

/// Core domain errors.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
