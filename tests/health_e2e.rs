//! Health endpoint E2E tests

mod mocks;

use crate::mocks::TestServer;
use reqwest::Client;

#[tokio::test]
async fn test_health_endpoint() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["storage_healthy"], true);
	assert!(body["version"].is_string());
	assert!(body["timestamp"].is_number());

	server.abort();
}

#[tokio::test]
async fn test_health_trailing_slash_and_security_headers() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health/", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let headers = resp.headers();
	assert_eq!(
		headers.get("x-content-type-options").unwrap(),
		"nosniff"
	);
	assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
	assert!(headers.get("x-request-id").is_some());

	server.abort();
}

#[tokio::test]
async fn test_unknown_route_is_404() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v2/does-not-exist", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
