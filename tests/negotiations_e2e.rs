//! Negotiation API E2E tests
//!
//! Tests for /v1/negotiations covering the accept/counter/reject ladder,
//! transcription repair, validation errors, and the recorded history.

mod mocks;

use crate::mocks::{BoardFixtures, TestConstants, TestServer};
use reqwest::Client;

// LD-1001 is posted at 2200, which puts the acceptance floor at 2090 and
// the walk-away at 1936.

#[tokio::test]
async fn test_offer_at_floor_is_accepted() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/negotiations", server.base_url))
		.json(&BoardFixtures::offer("LD-1001", 2090.0))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["decision"], "accept");
	assert_eq!(body["price"], 2090.0);
	assert_eq!(body["notes"]["board_rate"], 2200.0);
	assert_eq!(body["notes"]["min_accept"], 2090.0);
	assert_eq!(body["notes"]["walk_away"], 1936.0);
	assert_eq!(body["notes"]["raw_offer"], 2090.0);

	server.abort();
}

#[tokio::test]
async fn test_low_offer_is_rejected_at_walk_away() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/negotiations", server.base_url))
		.json(&BoardFixtures::offer("LD-1001", 1900.0))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["decision"], "reject");
	assert_eq!(body["price"], 1936.0);

	server.abort();
}

#[tokio::test]
async fn test_middling_offer_draws_midpoint_counter() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/negotiations", server.base_url))
		.json(&BoardFixtures::offer("LD-1001", 2000.0))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["decision"], "counter");
	assert_eq!(body["price"], 2100.0);

	server.abort();
}

#[tokio::test]
async fn test_ten_x_transcription_slip_is_repaired() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	// "Twenty-one hundred" heard as 21000: repaired to 2100 and accepted,
	// with the offer as heard preserved in the notes.
	let resp = client
		.post(format!("{}/v1/negotiations", server.base_url))
		.json(&BoardFixtures::offer("LD-1001", 21000.0))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["decision"], "accept");
	assert_eq!(body["price"], 2100.0);
	assert_eq!(body["notes"]["raw_offer"], 21000.0);

	server.abort();
}

#[tokio::test]
async fn test_string_offer_is_parsed_leniently() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/negotiations", server.base_url))
		.json(&serde_json::json!({
			"load_id": "LD-1001",
			"carrier_offer": "2090",
		}))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["decision"], "accept");
	assert_eq!(body["price"], 2090.0);

	server.abort();
}

#[tokio::test]
async fn test_missing_load_id_is_invalid_input() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/negotiations", server.base_url))
		.json(&serde_json::json!({"carrier_offer": 2000.0}))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "INVALID_INPUT");
	assert!(body["timestamp"].is_number());

	server.abort();
}

#[tokio::test]
async fn test_unknown_load_is_404() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/negotiations", server.base_url))
		.json(&BoardFixtures::offer("LD-9999", 2000.0))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "LOAD_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn test_history_records_outcomes_with_summary() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	for (load_id, offer) in [
		("LD-1001", 2090.0), // accept
		("LD-1001", 2000.0), // counter
		("LD-1001", 1500.0), // reject
	] {
		let resp = client
			.post(format!("{}/v1/negotiations", server.base_url))
			.json(&BoardFixtures::offer_with_identity(
				load_id,
				offer,
				TestConstants::ELIGIBLE_MC,
			))
			.send()
			.await
			.unwrap();
		assert!(resp.status().is_success());
	}

	let resp = client
		.get(format!("{}/v1/negotiations", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();

	let records = body["records"].as_array().expect("records array");
	assert_eq!(records.len(), 3);
	assert_eq!(records[0]["decision"], "accept");
	assert_eq!(records[1]["decision"], "counter");
	assert_eq!(records[2]["decision"], "reject");
	assert_eq!(records[0]["mc_number"], TestConstants::ELIGIBLE_MC);
	assert_eq!(records[0]["session_id"], "call-e2e-1");
	assert!(records[0]["record_id"].is_string());

	assert_eq!(body["summary"]["total"], 3);
	assert_eq!(body["summary"]["accepted"], 1);
	assert_eq!(body["summary"]["countered"], 1);
	assert_eq!(body["summary"]["rejected"], 1);

	server.abort();
}
