//! Fixed-table carrier registry
//!
//! Answers lookups from an in-memory table. Used by tests and by
//! deployments that run with the registry integration disabled:
//! [`StaticRegistry::unavailable`] fails every lookup exactly the way
//! an unreachable registry does, which lets the verification service's
//! permissive fallback carry the desk.

use std::collections::HashMap;

use async_trait::async_trait;
use haul_types::{
	CarrierEligibility, CarrierRegistry, EligibilitySource, RegistryError, RegistryResult,
};

/// Registry answering from a fixed carrier table
#[derive(Debug, Clone)]
pub struct StaticRegistry {
	carriers: HashMap<String, CarrierEligibility>,
	available: bool,
}

impl StaticRegistry {
	/// Create an empty, reachable registry
	pub fn new() -> Self {
		Self {
			carriers: HashMap::new(),
			available: true,
		}
	}

	/// Create a registry that reports an outage on every lookup
	pub fn unavailable() -> Self {
		Self {
			carriers: HashMap::new(),
			available: false,
		}
	}

	/// Add a carrier, keyed by its MC number
	pub fn with_carrier(mut self, eligibility: CarrierEligibility) -> Self {
		self.carriers
			.insert(eligibility.mc_number.clone(), eligibility);
		self
	}

	/// Add an eligible, authorized carrier under the given MC number
	pub fn with_eligible_carrier(self, mc_number: &str, name: &str) -> Self {
		self.with_carrier(CarrierEligibility {
			mc_number: mc_number.to_string(),
			carrier_name: Some(name.to_string()),
			eligible: true,
			operating_status: Some("AUTHORIZED_FOR_HIRE".to_string()),
			source: EligibilitySource::Registry,
		})
	}
}

impl Default for StaticRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl CarrierRegistry for StaticRegistry {
	async fn lookup_carrier(&self, mc_number: &str) -> RegistryResult<CarrierEligibility> {
		if !self.available {
			return Err(RegistryError::Unavailable {
				reason: "registry disabled".to_string(),
			});
		}
		self.carriers
			.get(mc_number)
			.cloned()
			.ok_or_else(|| RegistryError::NotFound {
				mc_number: mc_number.to_string(),
			})
	}

	fn name(&self) -> &str {
		"static"
	}
}
