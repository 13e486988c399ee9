//! API key authentication E2E tests
//!
//! Tests that a configured api_key protects the /v1/ surface while
//! leaving /health open, and that the default deployment runs open.

mod mocks;

use crate::mocks::{BoardFixtures, TestServer};
use reqwest::Client;

#[tokio::test]
async fn test_default_deployment_runs_open() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/loads/search", server.base_url))
		.json(&BoardFixtures::wildcard_search())
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	server.abort();
}

#[tokio::test]
async fn test_health_stays_public_with_auth_enabled() {
	let server = TestServer::spawn_with_api_key("desk-key")
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	server.abort();
}

#[tokio::test]
async fn test_missing_key_is_401() {
	let server = TestServer::spawn_with_api_key("desk-key")
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/loads/search", server.base_url))
		.json(&BoardFixtures::wildcard_search())
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);

	server.abort();
}

#[tokio::test]
async fn test_wrong_key_is_401() {
	let server = TestServer::spawn_with_api_key("desk-key")
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v1/negotiations", server.base_url))
		.header("x-api-key", "not-the-key")
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);

	server.abort();
}

#[tokio::test]
async fn test_valid_key_passes_all_routes() {
	let server = TestServer::spawn_with_api_key("desk-key")
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let search = client
		.post(format!("{}/v1/loads/search", server.base_url))
		.header("x-api-key", "desk-key")
		.json(&BoardFixtures::wildcard_search())
		.send()
		.await
		.unwrap();
	assert!(search.status().is_success());

	let negotiate = client
		.post(format!("{}/v1/negotiations", server.base_url))
		.header("x-api-key", "desk-key")
		.json(&BoardFixtures::offer("LD-1001", 2090.0))
		.send()
		.await
		.unwrap();
	assert!(negotiate.status().is_success());

	let history = client
		.get(format!("{}/v1/negotiations", server.base_url))
		.header("x-api-key", "desk-key")
		.send()
		.await
		.unwrap();
	assert!(history.status().is_success());

	let carrier = client
		.get(format!("{}/v1/carriers/123456", server.base_url))
		.header("x-api-key", "desk-key")
		.send()
		.await
		.unwrap();
	assert!(carrier.status().is_success());

	server.abort();
}
