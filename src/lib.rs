//! Haul Broker Library
//!
//! An inbound carrier-sales backend for freight brokers: load board search,
//! carrier offer negotiation, and FMCSA operating-authority checks behind
//! one HTTP API, built for phone-agent webhook integrations.

// Core domain types - the most commonly used types
pub use haul_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	AuthContext,
	AuthRequest,
	// Auth traits
	Authenticator,
	CarrierEligibility,
	CarrierRegistry,
	EligibilitySource,
	// Primary domain entities
	Load,
	LoadSearchRequest,
	LoadSearchResponse,
	NegotiationDecision,
	// Error types
	NegotiationError,
	NegotiationHistoryResponse,
	NegotiationOutcome,
	NegotiationRecord,
	NegotiationRequest,
	Permission,
	RegistryError,
	SearchError,
	SecretString,
};

// Service layer
pub use haul_service::{
	normalize_offer, CarrierService, CarrierServiceTrait, LoadSearchService, NegotiationService,
	NegotiationServiceTrait, SearchServiceTrait,
};

// Storage layer
pub use haul_storage::{
	traits::{LoadStorage, NegotiationStorage, StorageError, StorageResult},
	FileStore, MemoryStore, Storage,
};

// Storage traits module for advanced usage
pub mod traits {
	pub use haul_storage::traits::*;
}

// API layer
pub use haul_api::{create_router, AppState};
// Re-export auth implementations for convenience
pub use haul_api::auth::{ApiKeyAuthenticator, AuthConfig, NoAuthenticator};

// Registry clients
pub use haul_registry::{FmcsaClient, StaticRegistry};

// Config
pub use haul_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

// Module aliases for ergonomic imports
pub mod models {
	pub use haul_types::*;
}

pub mod storage {
	pub use haul_storage::*;
}

pub mod config {
	pub use haul_config::*;
}

pub mod registry {
	pub use haul_registry::*;
}

pub mod api {
	pub use haul_api::*;
	pub mod routes {
		pub use haul_api::{create_router, AppState};
	}
}

pub mod service {
	pub use haul_service::*;
}

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

// Re-export external dependencies for demos
pub use async_trait;
pub use reqwest;

use haul_api::auth::auth_middleware;
use haul_config::StorageBackend;

/// Builder pattern for configuring the broker
pub struct BrokerBuilder<S = MemoryStore, A = NoAuthenticator>
where
	S: Storage + 'static,
	A: Authenticator + 'static,
{
	settings: Option<Settings>,
	storage: S,
	storage_overridden: bool,
	authenticator: A,
	auth_overridden: bool,
	registry: Option<Arc<dyn CarrierRegistry>>,
	loads: Vec<Load>,
}

impl<S> BrokerBuilder<S, NoAuthenticator>
where
	S: Storage + 'static,
{
	/// Create a new broker builder with the provided storage
	///
	/// Storage passed here wins over whatever backend the settings name.
	pub fn with_storage(storage: S) -> Self {
		Self {
			settings: None,
			storage,
			storage_overridden: true,
			authenticator: NoAuthenticator,
			auth_overridden: false,
			registry: None,
			loads: Vec::new(),
		}
	}
}

// Default constructor using MemoryStore for convenience
impl Default for BrokerBuilder<MemoryStore, NoAuthenticator> {
	fn default() -> Self {
		Self::new()
	}
}

impl BrokerBuilder<MemoryStore, NoAuthenticator> {
	/// Create a new broker builder with default memory storage
	pub fn new() -> Self {
		let mut builder = Self::with_storage(MemoryStore::new());
		// Memory storage is only the default here, not an override; settings
		// may still select the file backend.
		builder.storage_overridden = false;
		builder
	}
}

impl<S, A> BrokerBuilder<S, A>
where
	S: Storage + 'static,
	A: Authenticator + 'static,
{
	/// Set custom authenticator
	///
	/// An authenticator passed here wins over the api_key in settings.
	pub fn with_auth<NewA>(self, authenticator: NewA) -> BrokerBuilder<S, NewA>
	where
		NewA: Authenticator + 'static,
	{
		BrokerBuilder {
			settings: self.settings,
			storage: self.storage,
			storage_overridden: self.storage_overridden,
			authenticator,
			auth_overridden: true,
			registry: self.registry,
			loads: self.loads,
		}
	}

	/// Set a custom carrier registry client
	///
	/// A registry passed here wins over the registry section in settings.
	pub fn with_registry(mut self, registry: Arc<dyn CarrierRegistry>) -> Self {
		self.registry = Some(registry);
		self
	}

	/// Post a load onto the board at startup
	pub fn with_load(mut self, load: Load) -> Self {
		self.loads.push(load);
		self
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use haul_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		// Initialize tracing with the configuration
		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Pick the storage backend: an explicit with_storage() call wins,
	/// otherwise the settings decide.
	fn build_storage(&self, settings: &Settings) -> Arc<dyn Storage>
	where
		S: Clone,
	{
		if self.storage_overridden {
			return Arc::new(self.storage.clone());
		}
		match settings.storage.backend {
			StorageBackend::Memory => Arc::new(self.storage.clone()),
			StorageBackend::File => {
				info!(
					"Using file storage: loads={} records={}",
					settings.storage.loads_path, settings.storage.records_path
				);
				Arc::new(FileStore::new(
					&settings.storage.loads_path,
					&settings.storage.records_path,
				))
			},
		}
	}

	/// Pick the carrier registry: an explicit with_registry() call wins,
	/// then the settings; a disabled registry answers every lookup as an
	/// outage, which the carrier service degrades to a permissive answer.
	fn build_registry(&self, settings: &Settings) -> Arc<dyn CarrierRegistry> {
		if let Some(registry) = &self.registry {
			return Arc::clone(registry);
		}

		if !settings.registry.enabled {
			info!("Carrier registry disabled; verifications take the fallback path");
			return Arc::new(StaticRegistry::unavailable());
		}

		let web_key = match settings.registry_web_key() {
			Ok(Some(key)) => key,
			Ok(None) => SecretString::new(String::new()),
			Err(e) => {
				warn!("Registry web key could not be resolved ({}); lookups will degrade", e);
				SecretString::new(String::new())
			},
		};

		match FmcsaClient::new(
			&settings.registry.endpoint,
			web_key,
			settings.registry.timeout_ms,
		) {
			Ok(client) => Arc::new(client),
			Err(e) => {
				warn!(
					"Registry client could not be built ({}); verifications take the fallback path",
					e
				);
				Arc::new(StaticRegistry::unavailable())
			},
		}
	}

	/// Pick the authenticator: an explicit with_auth() call wins, then a
	/// configured api_key; with neither, the API runs open.
	fn build_authenticator(self, settings: &Settings) -> Arc<dyn Authenticator> {
		if self.auth_overridden {
			return Arc::new(self.authenticator);
		}

		match settings.api_key() {
			Ok(Some(key)) => {
				info!("API key auth enabled");
				Arc::new(ApiKeyAuthenticator::with_key(
					key.expose_secret().to_string(),
					"voice-agent",
				))
			},
			Ok(None) => Arc::new(NoAuthenticator),
			Err(e) => {
				warn!("API key could not be resolved ({}); running open", e);
				Arc::new(NoAuthenticator)
			},
		}
	}

	/// Start the broker and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>>
	where
		S: Clone,
	{
		let settings = self.settings.clone().unwrap_or_default();

		let storage = self.build_storage(&settings);

		// Post seed loads onto the board before taking traffic
		for load in &self.loads {
			storage
				.add_load(load.clone())
				.await
				.map_err(|e| format!("Failed to post load '{}': {}", load.load_id, e))?;
		}
		let posted = storage
			.load_count()
			.await
			.map_err(|e| format!("Failed to count loads: {}", e))?;
		info!("Load board ready with {} load(s)", posted);

		let registry = self.build_registry(&settings);
		info!("Carrier registry: {}", registry.name());

		let authenticator = self.build_authenticator(&settings);

		// Create application state
		let app_state = AppState {
			search_service: Arc::new(LoadSearchService::new(Arc::clone(&storage)))
				as Arc<dyn SearchServiceTrait>,
			negotiation_service: Arc::new(NegotiationService::new(Arc::clone(&storage)))
				as Arc<dyn NegotiationServiceTrait>,
			carrier_service: Arc::new(CarrierService::new(Arc::clone(&registry)))
				as Arc<dyn CarrierServiceTrait>,
			storage,
		};

		// Create router with auth middleware and state
		let auth_config = AuthConfig::default();
		let router = create_router()
			.layer(axum::middleware::from_fn(
				move |request: axum::extract::Request, next: axum::middleware::Next| {
					auth_middleware(Arc::clone(&authenticator), auth_config.clone(), request, next)
				},
			))
			.with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>>
	where
		S: Clone,
	{
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log comprehensive service startup information
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		info!(
			"Storage backend: {:?}, registry enabled: {}, auth enabled: {}",
			settings.storage.backend,
			settings.registry.enabled,
			settings.auth.enabled()
		);

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);

		// Create the router using the builder pattern
		let (app, _) = self.start().await?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		// Log startup completion with comprehensive information
		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /v1/loads/search");
		info!("  GET  /v1/loads/{{load_id}}");
		info!("  POST /v1/negotiations");
		info!("  GET  /v1/negotiations");
		info!("  GET  /v1/carriers/{{mc_number}}");

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		log_service_shutdown();

		Ok(())
	}
}

/// Resolve when the process receives ctrl-c, letting in-flight requests drain
async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Failed to listen for shutdown signal: {}", e);
	}
}
