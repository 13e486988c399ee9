//! Storage-related types and traits

pub mod traits;
pub use traits::*;
