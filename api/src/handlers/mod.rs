//! Response handlers shared across routes.

pub mod error;

pub use error::{domain_error_response, validation_failure_response};
