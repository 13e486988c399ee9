//! Haul Storage
//!
//! Storage implementations for the haul-broker load board and
//! negotiation log. Supports in-memory and JSON file backends.

pub mod file_store;
pub mod memory_store;
pub mod traits;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use traits::{LoadStorage, NegotiationStorage, Storage, StorageError, StorageResult};
