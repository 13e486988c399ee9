//! Test server for integration tests
//!
//! Spawns the full application router, auth middleware included, on an
//! ephemeral port so tests exercise the service over real HTTP.

use std::sync::Arc;

use axum::Router;
use haul_broker::{mocks, BrokerBuilder, Settings, StaticRegistry};
use tokio::task::JoinHandle;

/// Test server instance
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a server with the sample board and the sample registry
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let mut builder = BrokerBuilder::new().with_registry(Arc::new(mocks::sample_registry()));
		for load in mocks::sample_loads() {
			builder = builder.with_load(load);
		}

		let (app, _state) = builder.start().await?;
		Self::spawn_server_with_app(app).await
	}

	/// Spawn a server with an empty board and no reachable registry
	#[allow(dead_code)]
	pub async fn spawn_minimal() -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = BrokerBuilder::new()
			.with_registry(Arc::new(StaticRegistry::unavailable()))
			.start()
			.await?;

		Self::spawn_server_with_app(app).await
	}

	/// Spawn the sample board behind a registry that is down
	#[allow(dead_code)]
	pub async fn spawn_with_registry_outage() -> Result<Self, Box<dyn std::error::Error>> {
		let mut builder =
			BrokerBuilder::new().with_registry(Arc::new(StaticRegistry::unavailable()));
		for load in mocks::sample_loads() {
			builder = builder.with_load(load);
		}

		let (app, _state) = builder.start().await?;
		Self::spawn_server_with_app(app).await
	}

	/// Spawn the sample board behind API key auth
	#[allow(dead_code)]
	pub async fn spawn_with_api_key(api_key: &str) -> Result<Self, Box<dyn std::error::Error>> {
		let mut settings = Settings::default();
		settings.auth.api_key = Some(haul_broker::config::ConfigurableValue::from_plain(api_key));

		let mut builder = BrokerBuilder::new()
			.with_settings(settings)
			.with_registry(Arc::new(mocks::sample_registry()));
		for load in mocks::sample_loads() {
			builder = builder.with_load(load);
		}

		let (app, _state) = builder.start().await?;
		Self::spawn_server_with_app(app).await
	}

	/// Common server spawning logic
	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
