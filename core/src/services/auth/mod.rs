//! Authentication gateway.
//!
//! Validates credentials against the user store, issues tokens through
//! the token service, and turns incoming bearer tokens back into an
//! authenticated-user context. Stateless between requests.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
