//! Load domain models
//!
//! A `Load` is one posted shipment on the load board: a lane (origin to
//! destination), a pickup/delivery window, the equipment it needs and the
//! rate the broker posted it at. Loads are read-only from the engine's point
//! of view; search and negotiation never mutate them.

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{SearchError, SearchResult};
pub use request::LoadSearchRequest;
pub use response::LoadSearchResponse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A posted freight load
///
/// `origin`, `destination` and `equipment_type` are free text exactly as the
/// load board provided them; matching against carrier preferences happens in
/// the service layer. The trailing optional fields are pass-through detail
/// for the carrier conversation and are never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
	/// Unique identifier within the current load snapshot
	pub load_id: String,
	/// Pickup city/state as posted, e.g. "Dallas, TX"
	pub origin: String,
	/// Delivery city/state as posted
	pub destination: String,
	pub pickup_datetime: DateTime<Utc>,
	pub delivery_datetime: DateTime<Utc>,
	/// Equipment the load requires, e.g. "Dry Van"
	pub equipment_type: String,
	/// Posted rate in whole dollars
	pub loadboard_rate: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub weight: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub commodity_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub num_of_pieces: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub miles: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub dimensions: Option<String>,
}

impl Load {
	/// Create a new load with the required board fields
	pub fn new(
		load_id: impl Into<String>,
		origin: impl Into<String>,
		destination: impl Into<String>,
		pickup_datetime: DateTime<Utc>,
		delivery_datetime: DateTime<Utc>,
		equipment_type: impl Into<String>,
		loadboard_rate: f64,
	) -> Self {
		Self {
			load_id: load_id.into(),
			origin: origin.into(),
			destination: destination.into(),
			pickup_datetime,
			delivery_datetime,
			equipment_type: equipment_type.into(),
			loadboard_rate,
			notes: None,
			weight: None,
			commodity_type: None,
			num_of_pieces: None,
			miles: None,
			dimensions: None,
		}
	}

	/// Attach free-text notes
	pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
		self.notes = Some(notes.into());
		self
	}

	/// Attach the shipment weight in pounds
	pub fn with_weight(mut self, weight: f64) -> Self {
		self.weight = Some(weight);
		self
	}

	/// Attach the commodity description
	pub fn with_commodity(mut self, commodity_type: impl Into<String>) -> Self {
		self.commodity_type = Some(commodity_type.into());
		self
	}

	/// Attach the piece count
	pub fn with_pieces(mut self, num_of_pieces: u32) -> Self {
		self.num_of_pieces = Some(num_of_pieces);
		self
	}

	/// Attach the lane distance in miles
	pub fn with_miles(mut self, miles: f64) -> Self {
		self.miles = Some(miles);
		self
	}

	/// Attach the dimensions string, e.g. "48x102"
	pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
		self.dimensions = Some(dimensions.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	fn create_test_load() -> Load {
		Load::new(
			"LD-1001".to_string(),
			"Dallas, TX".to_string(),
			"Atlanta, GA".to_string(),
			Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 4, 17, 0, 0).unwrap(),
			"Dry Van".to_string(),
			2200.0,
		)
	}

	#[test]
	fn test_load_creation() {
		let load = create_test_load();
		assert_eq!(load.load_id, "LD-1001");
		assert_eq!(load.origin, "Dallas, TX");
		assert_eq!(load.loadboard_rate, 2200.0);
		assert!(load.notes.is_none());
		assert!(load.weight.is_none());
	}

	#[test]
	fn test_load_builder_methods() {
		let load = create_test_load()
			.with_notes("No touch freight".to_string())
			.with_weight(42_000.0)
			.with_commodity("Paper products".to_string())
			.with_pieces(22)
			.with_miles(781.0)
			.with_dimensions("48x102".to_string());

		assert_eq!(load.notes.as_deref(), Some("No touch freight"));
		assert_eq!(load.weight, Some(42_000.0));
		assert_eq!(load.commodity_type.as_deref(), Some("Paper products"));
		assert_eq!(load.num_of_pieces, Some(22));
		assert_eq!(load.miles, Some(781.0));
		assert_eq!(load.dimensions.as_deref(), Some("48x102"));
	}

	#[test]
	fn test_load_serde_round_trip() {
		let load = create_test_load().with_weight(42_000.0);
		let json = serde_json::to_string(&load).unwrap();
		let back: Load = serde_json::from_str(&json).unwrap();
		assert_eq!(load, back);
	}

	#[test]
	fn test_load_optional_fields_stay_absent() {
		let json = serde_json::to_value(create_test_load()).unwrap();
		let object = json.as_object().unwrap();
		assert!(!object.contains_key("notes"));
		assert!(!object.contains_key("dimensions"));
		assert!(object.contains_key("loadboard_rate"));
	}

	#[test]
	fn test_load_deserializes_board_snapshot() {
		let json = r#"{
			"load_id": "LD-7",
			"origin": "Chicago, IL",
			"destination": "Columbus, OH",
			"pickup_datetime": "2024-06-03T08:00:00Z",
			"delivery_datetime": "2024-06-04T17:00:00Z",
			"equipment_type": "Reefer",
			"loadboard_rate": 1850.5,
			"weight": 38000,
			"commodity_type": "Produce"
		}"#;

		let load: Load = serde_json::from_str(json).unwrap();
		assert_eq!(load.load_id, "LD-7");
		assert_eq!(load.equipment_type, "Reefer");
		assert_eq!(load.loadboard_rate, 1850.5);
		assert_eq!(load.weight, Some(38000.0));
		assert!(load.notes.is_none());
	}
}
