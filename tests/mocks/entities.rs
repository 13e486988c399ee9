//! Domain entity fixtures for testing

use haul_broker::chrono::{TimeZone, Utc};
use haul_broker::serde_json::{json, Value};
use haul_broker::Load;

/// MC numbers the sample registry knows about
pub struct TestConstants;

#[allow(dead_code)]
impl TestConstants {
	/// Authorized carrier in the sample registry
	pub const ELIGIBLE_MC: &'static str = "123456";
	/// Carrier the sample registry lists as out of service
	pub const OUT_OF_SERVICE_MC: &'static str = "224466";
	/// MC number the sample registry has never heard of
	pub const UNKNOWN_MC: &'static str = "999999";
	/// Board rate of load LD-1001 in the sample board
	pub const LD_1001_RATE: f64 = 2200.0;
}

/// Request body builders for tests
#[allow(dead_code)]
pub struct BoardFixtures;

#[allow(dead_code)]
impl BoardFixtures {
	/// Search body naming a full lane and equipment
	pub fn search_request(origin: &str, destination: &str, equipment_type: &str) -> Value {
		json!({
			"origin": origin,
			"destination": destination,
			"equipment_type": equipment_type,
		})
	}

	/// Search body with no criteria; matches the whole board
	pub fn wildcard_search() -> Value {
		json!({})
	}

	/// Offer body with just the required fields
	pub fn offer(load_id: &str, carrier_offer: f64) -> Value {
		json!({
			"load_id": load_id,
			"carrier_offer": carrier_offer,
		})
	}

	/// Offer body carrying carrier identity, as the voice agent sends it
	pub fn offer_with_identity(load_id: &str, carrier_offer: f64, mc_number: &str) -> Value {
		json!({
			"load_id": load_id,
			"carrier_offer": carrier_offer,
			"mc_number": mc_number,
			"session_id": "call-e2e-1",
		})
	}

	/// A load for custom boards, with the rate the test cares about
	pub fn load(load_id: &str, rate: f64) -> Load {
		Load::new(
			load_id.to_string(),
			"Dallas, TX".to_string(),
			"Atlanta, GA".to_string(),
			Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 4, 17, 0, 0).unwrap(),
			"Dry Van".to_string(),
			rate,
		)
	}
}
