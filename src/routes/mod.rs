//! HTTP route handlers.

pub mod errors;
pub mod system;
pub mod types;
