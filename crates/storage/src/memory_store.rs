//! In-memory storage implementation using DashMap

use crate::traits::{LoadStorage, NegotiationStorage, Storage, StorageResult, StorageStats};
use async_trait::async_trait;
use dashmap::DashMap;
use haul_types::{Load, NegotiationRecord};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store for posted loads and negotiation records
///
/// Loads live in a DashMap keyed by load id. A side vector remembers
/// posting order: search ranking breaks rate ties by board position, so
/// `list_loads` must replay loads in the order they were added.
#[derive(Clone)]
pub struct MemoryStore {
	loads: Arc<DashMap<String, Load>>,
	load_order: Arc<RwLock<Vec<String>>>,
	records: Arc<RwLock<Vec<NegotiationRecord>>>,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self {
			loads: Arc::new(DashMap::new()),
			load_order: Arc::new(RwLock::new(Vec::new())),
			records: Arc::new(RwLock::new(Vec::new())),
		}
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl LoadStorage for MemoryStore {
	async fn add_load(&self, load: Load) -> StorageResult<()> {
		let load_id = load.load_id.clone();
		// The order lock is held across the insert so a concurrent
		// list_loads never sees a load that is missing from the order.
		let mut order = self.load_order.write().await;
		if self.loads.insert(load_id.clone(), load).is_none() {
			order.push(load_id);
		}
		Ok(())
	}

	async fn get_load(&self, load_id: &str) -> StorageResult<Option<Load>> {
		Ok(self.loads.get(load_id).map(|l| l.clone()))
	}

	async fn list_loads(&self) -> StorageResult<Vec<Load>> {
		let order = self.load_order.read().await;
		Ok(order
			.iter()
			.filter_map(|id| self.loads.get(id).map(|l| l.clone()))
			.collect())
	}

	async fn load_count(&self) -> StorageResult<usize> {
		Ok(self.loads.len())
	}
}

#[async_trait]
impl NegotiationStorage for MemoryStore {
	async fn append_record(&self, record: NegotiationRecord) -> StorageResult<()> {
		self.records.write().await.push(record);
		Ok(())
	}

	async fn list_records(&self) -> StorageResult<Vec<NegotiationRecord>> {
		Ok(self.records.read().await.clone())
	}

	async fn record_count(&self) -> StorageResult<usize> {
		Ok(self.records.read().await.len())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		// For in-memory storage, just check that the maps are accessible
		Ok(true)
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_loads: self.load_count().await?,
			total_negotiations: self.record_count().await?,
		})
	}

	async fn close(&self) -> StorageResult<()> {
		// For memory store, there's nothing to close
		Ok(())
	}
}
