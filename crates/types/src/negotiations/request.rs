//! Negotiation request model

use serde::{Deserialize, Deserializer, Serialize};

/// API request body for the /v1/negotiations endpoint
///
/// `load_id` stays an `Option` so that an absent id is reported as a domain
/// validation error rather than a deserialization failure. `carrier_offer`
/// arrives from voice transcription and is deserialized leniently: a JSON
/// number or a numeric string is taken at face value, anything else becomes 0
/// and flows through the normal decision arithmetic.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NegotiationRequest {
	pub load_id: Option<String>,
	#[serde(default, deserialize_with = "lenient_f64")]
	pub carrier_offer: f64,
	/// Carrier's MC number, recorded with the outcome when present
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mc_number: Option<String>,
	/// Opaque call/session identifier, echoed into the record
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub session_id: Option<String>,
}

/// Accept numbers, numeric strings, and fall back to 0 for everything else
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: Deserializer<'de>,
{
	let value = serde_json::Value::deserialize(deserializer)?;
	let offer = match value {
		serde_json::Value::Number(number) => number.as_f64().unwrap_or(0.0),
		serde_json::Value::String(text) => text.trim().parse::<f64>().unwrap_or(0.0),
		_ => 0.0,
	};
	Ok(offer)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_numeric_offer() {
		let request: NegotiationRequest =
			serde_json::from_str(r#"{"load_id": "LD-1", "carrier_offer": 2000}"#).unwrap();
		assert_eq!(request.carrier_offer, 2000.0);
		assert_eq!(request.load_id.as_deref(), Some("LD-1"));
	}

	#[test]
	fn test_string_offer_is_parsed() {
		let request: NegotiationRequest =
			serde_json::from_str(r#"{"load_id": "LD-1", "carrier_offer": " 2150.50 "}"#).unwrap();
		assert_eq!(request.carrier_offer, 2150.5);
	}

	#[test]
	fn test_garbage_offer_becomes_zero() {
		for body in [
			r#"{"load_id": "LD-1", "carrier_offer": "about two grand"}"#,
			r#"{"load_id": "LD-1", "carrier_offer": null}"#,
			r#"{"load_id": "LD-1", "carrier_offer": true}"#,
			r#"{"load_id": "LD-1", "carrier_offer": {"amount": 2000}}"#,
		] {
			let request: NegotiationRequest = serde_json::from_str(body).unwrap();
			assert_eq!(request.carrier_offer, 0.0, "body: {}", body);
		}
	}

	#[test]
	fn test_missing_offer_defaults_to_zero() {
		let request: NegotiationRequest =
			serde_json::from_str(r#"{"load_id": "LD-1"}"#).unwrap();
		assert_eq!(request.carrier_offer, 0.0);
	}

	#[test]
	fn test_missing_load_id_still_deserializes() {
		let request: NegotiationRequest =
			serde_json::from_str(r#"{"carrier_offer": 1800}"#).unwrap();
		assert!(request.load_id.is_none());
	}

	#[test]
	fn test_identity_fields_pass_through() {
		let request: NegotiationRequest = serde_json::from_str(
			r#"{"load_id": "LD-1", "carrier_offer": 1800, "mc_number": "MC-123456", "session_id": "call-9"}"#,
		)
		.unwrap();
		assert_eq!(request.mc_number.as_deref(), Some("MC-123456"));
		assert_eq!(request.session_id.as_deref(), Some("call-9"));
	}
}
