//! Storage traits for pluggable storage implementations

// Re-export the storage traits from the types crate
pub use haul_types::storage::{
	LoadStorageTrait as LoadStorage, NegotiationStorageTrait as NegotiationStorage, StorageError,
	StorageResult, StorageStats, StorageTrait as Storage,
};
