//! JSON file storage implementation
//!
//! Persists the load board and the negotiation log as two JSON files,
//! so a desk survives restarts and can seed its board by editing a
//! file. Missing files read as empty collections and are created on
//! first write. Writers in the same process are serialized by an
//! internal lock; the files themselves carry no lock, so across
//! processes the last writer wins.

use crate::traits::{
	LoadStorage, NegotiationStorage, Storage, StorageError, StorageResult, StorageStats,
};
use async_trait::async_trait;
use haul_types::{Load, NegotiationRecord};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// File-backed store holding loads and negotiation records as JSON
#[derive(Clone)]
pub struct FileStore {
	loads_path: PathBuf,
	records_path: PathBuf,
	write_lock: Arc<Mutex<()>>,
}

impl FileStore {
	/// Create a store over the given board and record file paths
	pub fn new(loads_path: impl Into<PathBuf>, records_path: impl Into<PathBuf>) -> Self {
		Self {
			loads_path: loads_path.into(),
			records_path: records_path.into(),
			write_lock: Arc::new(Mutex::new(())),
		}
	}

	async fn read_loads(&self) -> StorageResult<Vec<Load>> {
		let bytes = match tokio::fs::read(&self.loads_path).await {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
			Err(e) => {
				return Err(StorageError::Io {
					message: e.to_string(),
				})
			},
		};
		if bytes.is_empty() {
			return Ok(Vec::new());
		}
		serde_json::from_slice(&bytes).map_err(|e| StorageError::Serialization {
			message: format!("{}: {}", self.loads_path.display(), e),
		})
	}

	async fn read_records(&self) -> StorageResult<Vec<NegotiationRecord>> {
		let bytes = match tokio::fs::read(&self.records_path).await {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
			Err(e) => {
				return Err(StorageError::Io {
					message: e.to_string(),
				})
			},
		};
		if bytes.is_empty() {
			return Ok(Vec::new());
		}
		serde_json::from_slice(&bytes).map_err(|e| StorageError::Serialization {
			message: format!("{}: {}", self.records_path.display(), e),
		})
	}

	async fn write_loads(&self, loads: &[Load]) -> StorageResult<()> {
		let bytes = serde_json::to_vec_pretty(loads).map_err(|e| StorageError::Serialization {
			message: e.to_string(),
		})?;
		write_file(&self.loads_path, bytes).await
	}

	async fn write_records(&self, records: &[NegotiationRecord]) -> StorageResult<()> {
		let bytes = serde_json::to_vec_pretty(records).map_err(|e| StorageError::Serialization {
			message: e.to_string(),
		})?;
		write_file(&self.records_path, bytes).await
	}
}

async fn write_file(path: &Path, bytes: Vec<u8>) -> StorageResult<()> {
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			tokio::fs::create_dir_all(parent)
				.await
				.map_err(|e| StorageError::Io {
					message: e.to_string(),
				})?;
		}
	}
	tokio::fs::write(path, bytes)
		.await
		.map_err(|e| StorageError::Io {
			message: e.to_string(),
		})
}

#[async_trait]
impl LoadStorage for FileStore {
	async fn add_load(&self, load: Load) -> StorageResult<()> {
		let _guard = self.write_lock.lock().await;
		let mut loads = self.read_loads().await?;
		match loads.iter_mut().find(|l| l.load_id == load.load_id) {
			Some(slot) => *slot = load,
			None => loads.push(load),
		}
		self.write_loads(&loads).await
	}

	async fn get_load(&self, load_id: &str) -> StorageResult<Option<Load>> {
		let loads = self.read_loads().await?;
		Ok(loads.into_iter().find(|l| l.load_id == load_id))
	}

	async fn list_loads(&self) -> StorageResult<Vec<Load>> {
		self.read_loads().await
	}

	async fn load_count(&self) -> StorageResult<usize> {
		Ok(self.read_loads().await?.len())
	}
}

#[async_trait]
impl NegotiationStorage for FileStore {
	async fn append_record(&self, record: NegotiationRecord) -> StorageResult<()> {
		let _guard = self.write_lock.lock().await;
		let mut records = self.read_records().await?;
		records.push(record);
		debug!(
			"Appending negotiation record, log now holds {}",
			records.len()
		);
		self.write_records(&records).await
	}

	async fn list_records(&self) -> StorageResult<Vec<NegotiationRecord>> {
		self.read_records().await
	}

	async fn record_count(&self) -> StorageResult<usize> {
		Ok(self.read_records().await?.len())
	}
}

#[async_trait]
impl Storage for FileStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(self.read_loads().await.is_ok() && self.read_records().await.is_ok())
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_loads: self.load_count().await?,
			total_negotiations: self.record_count().await?,
		})
	}

	async fn close(&self) -> StorageResult<()> {
		// Every operation opens and closes the files itself
		Ok(())
	}
}
