//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, File};

/// Load configuration from the default config file
///
/// Reads `config/config.{toml,json,yaml}` relative to the working
/// directory. A missing file yields default settings; sections the file
/// leaves out keep their defaults too.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	s.try_deserialize()
}

/// Load configuration from an explicit file path
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(true))
		.build()?;

	s.try_deserialize()
}
