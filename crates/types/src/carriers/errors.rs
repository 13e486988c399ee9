//! Carrier registry error types

use thiserror::Error;

/// Errors from the carrier-eligibility registry
///
/// `Unavailable` is the outage class: callers that can degrade gracefully
/// should treat it as "assume eligible", not as a failure. The other
/// variants are real answers or real faults and are surfaced as such.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// The registry could not be reached (timeout, connect failure, 5xx,
	/// or no credential configured)
	#[error("Carrier registry unavailable: {reason}")]
	Unavailable { reason: String },

	/// The registry answered and knows no such carrier
	#[error("Carrier not found: MC {mc_number}")]
	NotFound { mc_number: String },

	/// The MC number has no usable digits
	#[error("Invalid MC number: '{value}'")]
	InvalidMcNumber { value: String },

	/// The registry answered with a payload we could not interpret
	#[error("Invalid registry response: {reason}")]
	InvalidResponse { reason: String },

	/// The registry rejected the request outright
	#[error("Carrier registry returned HTTP {status}")]
	Http { status: u16 },

	/// The registry client itself is misconfigured
	#[error("Registry configuration error: {reason}")]
	Configuration { reason: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
