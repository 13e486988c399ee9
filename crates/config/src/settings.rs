//! Configuration settings structures

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};
use haul_types::constants::limits::DEFAULT_REGISTRY_TIMEOUT_MS;
use haul_types::SecretString;
use serde::{Deserialize, Serialize};

/// Main application settings
///
/// Every section falls back to its default when absent, so a config
/// file only needs to name the settings it changes.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub storage: StorageSettings,
	pub registry: RegistrySettings,
	pub auth: AuthSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

/// Storage backend selection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
	Memory,
	File,
}

/// Storage configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageSettings {
	pub backend: StorageBackend,
	/// Board file, read and written when the file backend is selected
	pub loads_path: String,
	/// Negotiation log file for the file backend
	pub records_path: String,
}

impl Default for StorageSettings {
	fn default() -> Self {
		Self {
			backend: StorageBackend::Memory,
			loads_path: "data/loads.json".to_string(),
			records_path: "data/negotiations.json".to_string(),
		}
	}
}

/// Carrier registry configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RegistrySettings {
	/// When false, no registry client is built and every verification
	/// takes the permissive fallback path
	pub enabled: bool,
	pub endpoint: String,
	/// FMCSA web key. Example configurations:
	/// - Environment variable: `{"type": "env", "value": "FMCSA_WEB_KEY"}`
	/// - Plain value: `{"type": "plain", "value": "your-key-here"}`
	pub web_key: Option<ConfigurableValue>,
	pub timeout_ms: u64,
}

impl Default for RegistrySettings {
	fn default() -> Self {
		Self {
			enabled: true,
			endpoint: "https://mobile.fmcsa.dot.gov/qc/services".to_string(),
			web_key: Some(ConfigurableValue::from_env("FMCSA_WEB_KEY")),
			timeout_ms: DEFAULT_REGISTRY_TIMEOUT_MS,
		}
	}
}

/// API authentication configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AuthSettings {
	/// Key clients must present in the x-api-key header. When unset,
	/// the API runs open.
	pub api_key: Option<ConfigurableValue>,
}

impl AuthSettings {
	pub fn enabled(&self) -> bool {
		self.api_key.is_some()
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Resolve the registry web key, if one is configured
	pub fn registry_web_key(&self) -> Result<Option<SecretString>, ConfigurableValueError> {
		match &self.registry.web_key {
			Some(value) => value.resolve_for_secret().map(Some),
			None => Ok(None),
		}
	}

	/// Resolve the API key clients must present, if auth is enabled
	pub fn api_key(&self) -> Result<Option<SecretString>, ConfigurableValueError> {
		match &self.auth.api_key {
			Some(value) => value.resolve_for_secret().map(Some),
			None => Ok(None),
		}
	}
}
