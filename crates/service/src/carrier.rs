//! Carrier verification service
//!
//! Checks a carrier's MC number against the federal motor carrier
//! registry before a negotiation proceeds. The registry is an external
//! dependency with its own outages; when it cannot be reached the
//! service answers permissively instead of failing, because refusing
//! every carrier during a registry outage stops the whole desk.

use std::sync::Arc;

use async_trait::async_trait;
use haul_types::{
	normalize_mc_number, CarrierEligibility, CarrierRegistry, RegistryError, RegistryResult,
};
use tracing::{debug, warn};

/// Trait for carrier verification operations
#[async_trait]
pub trait CarrierServiceTrait: Send + Sync {
	/// Verify a carrier by MC number, degrading to a permissive answer
	/// when the registry is unreachable
	async fn verify_carrier(&self, mc_number: &str) -> RegistryResult<CarrierEligibility>;
}

/// Verification service over a pluggable registry client
#[derive(Clone)]
pub struct CarrierService {
	registry: Arc<dyn CarrierRegistry>,
}

impl CarrierService {
	pub fn new(registry: Arc<dyn CarrierRegistry>) -> Self {
		Self { registry }
	}
}

#[async_trait]
impl CarrierServiceTrait for CarrierService {
	async fn verify_carrier(&self, mc_number: &str) -> RegistryResult<CarrierEligibility> {
		let mc = normalize_mc_number(mc_number).ok_or_else(|| RegistryError::InvalidMcNumber {
			value: mc_number.to_string(),
		})?;

		match self.registry.lookup_carrier(&mc).await {
			Ok(eligibility) => {
				debug!(
					"Registry answered for MC {}: eligible={}",
					mc, eligibility.eligible
				);
				Ok(eligibility)
			},
			Err(RegistryError::Unavailable { reason }) => {
				warn!(
					"Carrier registry unavailable ({}), answering permissively for MC {}",
					reason, mc
				);
				Ok(CarrierEligibility::fallback(&mc))
			},
			Err(e) => Err(e),
		}
	}
}
