//! Carrier registry trait for pluggable eligibility backends

use super::{CarrierEligibility, RegistryResult};
use async_trait::async_trait;

/// A source of carrier-eligibility answers
///
/// Implementations look a carrier up by MC number (digits only, already
/// normalized by the caller). The production implementation queries the
/// FMCSA QCMobile API; tests and offline runs use a static allowlist.
#[async_trait]
pub trait CarrierRegistry: Send + Sync {
	/// Look up a carrier's operating authority
	async fn lookup_carrier(&self, mc_number: &str) -> RegistryResult<CarrierEligibility>;

	/// Human-readable name for this registry backend
	fn name(&self) -> &str;
}
