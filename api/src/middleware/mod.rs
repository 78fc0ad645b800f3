//! HTTP middleware.

pub mod auth;
pub mod cors;

pub use auth::{Authorizer, BearerAuth, CurrentUser};
pub use cors::create_cors;
