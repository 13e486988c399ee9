//! Haul Broker Server
//!
//! Main entry point for the broker server

use haul_broker::BrokerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	BrokerBuilder::new().start_server().await
}
