//! Request DTOs.

pub mod auth;
pub mod user;

pub use auth::LoginRequest;
pub use user::{RegisterRequest, UpdateChainNameRequest};
