//! Board and registry fixtures for demos and testing
//!
//! This module provides a small, realistic load board snapshot and a
//! fixed-table carrier registry that work without any external services.

use haul_registry::StaticRegistry;
use haul_storage::{LoadStorage, MemoryStore};
use haul_types::chrono::{TimeZone, Utc};
use haul_types::{CarrierEligibility, EligibilitySource, Load};

/// A small load board snapshot covering common lanes and equipment
pub fn sample_loads() -> Vec<Load> {
	vec![
		Load::new(
			"LD-1001",
			"Dallas, TX",
			"Atlanta, GA",
			Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 4, 17, 0, 0).unwrap(),
			"Dry Van",
			2200.0,
		)
		.with_weight(42_000.0)
		.with_commodity("Paper products")
		.with_miles(781.0),
		Load::new(
			"LD-1002",
			"Dallas, TX",
			"Atlanta, GA",
			Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap(),
			"Dry Van",
			2450.0,
		)
		.with_notes("No touch freight"),
		// Full state name on purpose; search normalizes it away
		Load::new(
			"LD-1003",
			"Fort Worth, Texas",
			"Savannah, GA",
			Utc.with_ymd_and_hms(2024, 6, 4, 6, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 5, 18, 0, 0).unwrap(),
			"Dry Van",
			2100.0,
		),
		// "Van" is board shorthand for a dry van
		Load::new(
			"LD-1004",
			"Dallas, TX",
			"Atlanta, GA",
			Utc.with_ymd_and_hms(2024, 6, 4, 9, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 6, 10, 0, 0).unwrap(),
			"Van",
			1990.0,
		),
		Load::new(
			"LD-1005",
			"Dallas, TX",
			"Atlanta, GA",
			Utc.with_ymd_and_hms(2024, 6, 5, 7, 30, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 6, 16, 0, 0).unwrap(),
			"Dry Van",
			1850.0,
		),
		Load::new(
			"LD-1006",
			"Chicago, IL",
			"Columbus, OH",
			Utc.with_ymd_and_hms(2024, 6, 3, 5, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 4, 11, 0, 0).unwrap(),
			"Reefer",
			1850.5,
		)
		.with_commodity("Produce")
		.with_weight(38_000.0),
		Load::new(
			"LD-1007",
			"Los Angeles, CA",
			"Phoenix, AZ",
			Utc.with_ymd_and_hms(2024, 6, 4, 12, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap(),
			"Flatbed",
			1400.0,
		)
		.with_pieces(22)
		.with_dimensions("48x102"),
	]
}

/// Memory store pre-seeded with [`sample_loads`]
pub async fn seeded_store() -> MemoryStore {
	let store = MemoryStore::new();
	for load in sample_loads() {
		store
			.add_load(load)
			.await
			.expect("memory store accepts loads");
	}
	store
}

/// Registry that recognizes the MC numbers used in demos and tests
///
/// MC 123456 is authorized; MC 224466 exists but is out of service.
pub fn sample_registry() -> StaticRegistry {
	StaticRegistry::new()
		.with_eligible_carrier("123456", "Sunbelt Freight LLC")
		.with_carrier(CarrierEligibility {
			mc_number: "224466".to_string(),
			carrier_name: Some("Rusty Wheels Transport".to_string()),
			eligible: false,
			operating_status: Some("OUT_OF_SERVICE".to_string()),
			source: EligibilitySource::Registry,
		})
}
