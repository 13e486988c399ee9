//! Negotiation domain models
//!
//! A negotiation evaluates one carrier offer against one load's posted rate
//! and produces an outcome: accept, counter or reject, with the price to say
//! on the call. Every evaluated outcome is also written to storage as a
//! `NegotiationRecord` for later review.

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{NegotiationError, NegotiationResult};
pub use request::NegotiationRequest;
pub use response::{NegotiationHistoryResponse, NegotiationSummary};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The three possible answers to a carrier offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegotiationDecision {
	Accept,
	Counter,
	Reject,
}

impl fmt::Display for NegotiationDecision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NegotiationDecision::Accept => write!(f, "accept"),
			NegotiationDecision::Counter => write!(f, "counter"),
			NegotiationDecision::Reject => write!(f, "reject"),
		}
	}
}

/// The figures behind a decision, always echoed back to the caller
///
/// `raw_offer` is the offer exactly as received, before any transcription
/// repair; the decision itself may have been made against a corrected value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NegotiationNotes {
	pub board_rate: f64,
	pub min_accept: f64,
	pub walk_away: f64,
	pub raw_offer: f64,
}

/// The decision for a single carrier offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationOutcome {
	pub load_id: String,
	pub decision: NegotiationDecision,
	/// Dollar figure to quote: the accepted offer, the counter price, or the
	/// walk-away floor on a reject
	pub price: f64,
	pub notes: NegotiationNotes,
}

/// A persisted negotiation outcome
///
/// Recording is best-effort call metrics; the record schema is owned here and
/// storage treats it as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationRecord {
	pub record_id: String,
	pub load_id: String,
	pub decision: NegotiationDecision,
	pub price: f64,
	pub notes: NegotiationNotes,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mc_number: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub session_id: Option<String>,
	pub created_at: DateTime<Utc>,
}

impl NegotiationRecord {
	/// Build a record from an outcome plus the caller identity fields
	pub fn new(
		outcome: NegotiationOutcome,
		mc_number: Option<String>,
		session_id: Option<String>,
	) -> Self {
		Self {
			record_id: Uuid::new_v4().to_string(),
			load_id: outcome.load_id,
			decision: outcome.decision,
			price: outcome.price,
			notes: outcome.notes,
			mc_number,
			session_id,
			created_at: Utc::now(),
		}
	}
}
