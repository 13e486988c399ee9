//! Authentication types and traits

pub mod errors;
pub mod traits;

pub use errors::*;
pub use traits::*;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;
