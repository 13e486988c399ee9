//! Tests for the Builder Pattern implementation

use haul_broker::{
	config::StorageBackend, mocks, BrokerBuilder, LoadSearchRequest, LoadStorage, MemoryStore,
	NegotiationRequest, Settings, StaticRegistry,
};
use std::sync::Arc;

/// Create a minimal test configuration
fn create_test_settings() -> Settings {
	let mut settings = Settings::default();
	settings.server.host = "127.0.0.1".to_string();
	settings.server.port = 3001; // Different port for testing
	settings.registry.enabled = false;
	settings.logging.level = "debug".to_string();
	settings
}

#[tokio::test]
async fn test_builder_new() {
	let builder = BrokerBuilder::new();
	assert!(builder.settings().is_none());
}

#[tokio::test]
async fn test_builder_with_settings() {
	let settings = create_test_settings();
	let builder = BrokerBuilder::new().with_settings(settings.clone());

	assert!(builder.settings().is_some());
	assert_eq!(builder.settings().unwrap().server.port, 3001);
}

#[tokio::test]
async fn test_builder_with_load_seeds_the_board() {
	let builder = BrokerBuilder::new()
		.with_registry(Arc::new(StaticRegistry::unavailable()))
		.with_load(mocks::sample_loads().remove(0));

	let (_, app_state) = builder.start().await.unwrap();
	assert_eq!(app_state.storage.load_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_builder_with_storage() {
	let custom_storage = mocks::seeded_store().await;
	let builder = BrokerBuilder::with_storage(custom_storage.clone())
		.with_registry(Arc::new(StaticRegistry::unavailable()));

	let (_, app_state) = builder.start().await.unwrap();

	// The provided store is the one behind the app
	assert_eq!(
		app_state.storage.load_count().await.unwrap(),
		mocks::sample_loads().len()
	);
	assert!(custom_storage.get_load("LD-1001").await.unwrap().is_some());
}

#[tokio::test]
async fn test_builder_storage_override_beats_file_settings() {
	let mut settings = create_test_settings();
	settings.storage.backend = StorageBackend::File;
	settings.storage.loads_path = "/nonexistent/loads.json".to_string();
	settings.storage.records_path = "/nonexistent/records.json".to_string();

	// with_storage wins over the file backend in settings, so the bogus
	// paths are never touched
	let builder = BrokerBuilder::with_storage(MemoryStore::new())
		.with_settings(settings)
		.with_registry(Arc::new(StaticRegistry::unavailable()));

	let result = builder.start().await;
	assert!(result.is_ok());
}

#[tokio::test]
async fn test_builder_file_backend_from_settings() {
	let dir = tempfile::tempdir().unwrap();
	let mut settings = create_test_settings();
	settings.storage.backend = StorageBackend::File;
	settings.storage.loads_path = dir
		.path()
		.join("loads.json")
		.to_string_lossy()
		.into_owned();
	settings.storage.records_path = dir
		.path()
		.join("records.json")
		.to_string_lossy()
		.into_owned();

	let builder = BrokerBuilder::new()
		.with_settings(settings.clone())
		.with_registry(Arc::new(StaticRegistry::unavailable()))
		.with_load(mocks::sample_loads().remove(0));

	let (_, app_state) = builder.start().await.unwrap();
	assert_eq!(app_state.storage.load_count().await.unwrap(), 1);

	// The seeded load landed on disk, not in a memory store
	assert!(std::path::Path::new(&settings.storage.loads_path).exists());
}

#[tokio::test]
async fn test_builder_start_wires_services() {
	let mut builder = BrokerBuilder::new().with_registry(Arc::new(mocks::sample_registry()));
	for load in mocks::sample_loads() {
		builder = builder.with_load(load);
	}

	let (_, app_state) = builder.start().await.unwrap();

	let search = app_state
		.search_service
		.search_loads(&LoadSearchRequest::default())
		.await
		.unwrap();
	assert_eq!(search.total_matched, 7);
	assert_eq!(search.returned, 3);

	let outcome = app_state
		.negotiation_service
		.negotiate(&NegotiationRequest {
			load_id: Some("LD-1001".to_string()),
			carrier_offer: 2090.0,
			..Default::default()
		})
		.await
		.unwrap();
	assert_eq!(outcome.price, 2090.0);

	let eligibility = app_state
		.carrier_service
		.verify_carrier("123456")
		.await
		.unwrap();
	assert!(eligibility.eligible);
}

#[tokio::test]
async fn test_builder_defaults_handling() {
	// Builder works with just defaults; the default registry cannot reach
	// a real web key in tests but start() must still succeed
	let builder = BrokerBuilder::new();
	let result = builder.start().await;

	assert!(result.is_ok());
	let (_, app_state) = result.unwrap();
	assert_eq!(app_state.storage.load_count().await.unwrap(), 0);
}
