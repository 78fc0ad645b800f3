//! Authentication routes.

pub mod login;

pub use login::login;
