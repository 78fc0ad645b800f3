//! Route handlers, one module per resource.

pub mod auth;
pub mod properties;
pub mod users;
