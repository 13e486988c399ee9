//! Service startup logging for the haul broker
//!
//! This module provides logging for service startup and shutdown,
//! including service information, environment details, and system
//! information.

use std::env;
use tracing::info;

/// Logs comprehensive service information at startup
pub fn log_service_info() {
	// Use the root package name and version, not the current crate
	let service_name = "haul-broker";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Haul Broker Service Starting ===");
	info!("🚚 Service: {} v{}", service_name, service_version);

	// Log platform information
	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	// Log current working directory
	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	// Log important environment variables if present
	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	// Log startup timestamp
	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);

	info!("🎯 Starting broker initialization...");
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Haul Broker Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs additional startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Haul Broker Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
