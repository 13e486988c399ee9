//! Negotiation error types

use thiserror::Error;

/// Errors surfaced while evaluating a carrier offer
#[derive(Debug, Error)]
pub enum NegotiationError {
	/// The request is missing data the engine cannot default, e.g. no load id
	#[error("Invalid negotiation request: {reason}")]
	InvalidInput { reason: String },

	/// The referenced load is not in the current snapshot
	#[error("Load not found: {load_id}")]
	LoadNotFound { load_id: String },

	/// The load snapshot or record log could not be read
	#[error("Storage error: {message}")]
	Storage { message: String },
}

pub type NegotiationResult<T> = Result<T, NegotiationError>;
