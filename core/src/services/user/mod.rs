//! User account service: registration and profile updates.

mod service;

pub use service::UserService;
