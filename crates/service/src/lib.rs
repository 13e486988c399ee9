//! Haul Service
//!
//! Core logic for load search, carrier verification and rate negotiation.

pub mod carrier;
pub mod equipment;
pub mod negotiation;
pub mod place;
pub mod search;

pub use carrier::{CarrierService, CarrierServiceTrait};
pub use negotiation::{normalize_offer, NegotiationService, NegotiationServiceTrait};
pub use search::{LoadSearchService, SearchServiceTrait};
