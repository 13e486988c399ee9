use std::sync::Arc;

use haul_service::{CarrierServiceTrait, NegotiationServiceTrait, SearchServiceTrait};
use haul_storage::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub search_service: Arc<dyn SearchServiceTrait>,
	pub negotiation_service: Arc<dyn NegotiationServiceTrait>,
	pub carrier_service: Arc<dyn CarrierServiceTrait>,
	pub storage: Arc<dyn Storage>,
}
