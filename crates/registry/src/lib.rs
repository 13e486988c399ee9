//! Haul Registry
//!
//! Carrier registry clients for verifying motor carrier authority.

pub mod fmcsa;
pub mod static_registry;

pub use fmcsa::FmcsaClient;
pub use haul_types::{CarrierEligibility, CarrierRegistry, RegistryError, RegistryResult};
pub use static_registry::StaticRegistry;
