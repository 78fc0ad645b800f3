//! User management routes.

pub mod chain_name;
pub mod me;
pub mod register;

pub use chain_name::update_chain_name;
pub use me::me;
pub use register::register;
