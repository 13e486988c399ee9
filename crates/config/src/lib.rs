//! Haul Configuration
//!
//! Configuration management and startup utilities for the haul broker.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from};
pub use settings::{
	AuthSettings, LogFormat, LoggingSettings, RegistrySettings, ServerSettings, Settings,
	StorageBackend, StorageSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
