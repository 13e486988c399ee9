//! Authentication and authorization module

pub mod authenticators;
pub mod middleware;

pub use authenticators::*;
pub use middleware::*;
