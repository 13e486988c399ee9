//! Storage traits for pluggable storage implementations

use crate::loads::Load;
use crate::negotiations::NegotiationRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("Item not found: {id}")]
	NotFound { id: String },
	#[error("I/O error: {message}")]
	Io { message: String },
	#[error("Serialization error: {message}")]
	Serialization { message: String },
	#[error("Storage operation failed: {message}")]
	Operation { message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Statistics about storage usage
#[derive(Debug, Clone)]
pub struct StorageStats {
	pub total_loads: usize,
	pub total_negotiations: usize,
}

/// Trait for load snapshot access
///
/// `list_loads` must preserve the snapshot's own ordering: ranking breaks
/// rate ties by position in the collection.
#[async_trait]
pub trait LoadStorageTrait: Send + Sync {
	/// Add a load to the snapshot, replacing any load with the same id
	async fn add_load(&self, load: Load) -> StorageResult<()>;

	/// Get a load by ID
	async fn get_load(&self, load_id: &str) -> StorageResult<Option<Load>>;

	/// Get the full load snapshot in collection order
	async fn list_loads(&self) -> StorageResult<Vec<Load>>;

	/// Get load count
	async fn load_count(&self) -> StorageResult<usize>;
}

/// Trait for the negotiation record log
#[async_trait]
pub trait NegotiationStorageTrait: Send + Sync {
	/// Append an outcome record to the log
	async fn append_record(&self, record: NegotiationRecord) -> StorageResult<()>;

	/// Get all recorded outcomes in append order
	async fn list_records(&self) -> StorageResult<Vec<NegotiationRecord>>;

	/// Get record count
	async fn record_count(&self) -> StorageResult<usize>;
}

/// Main storage trait that combines all storage operations
#[async_trait]
pub trait StorageTrait: LoadStorageTrait + NegotiationStorageTrait {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;

	/// Get overall storage statistics
	async fn stats(&self) -> StorageResult<StorageStats>;

	/// Close the storage backend
	async fn close(&self) -> StorageResult<()>;
}
