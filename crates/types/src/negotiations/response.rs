//! Negotiation history response models

use super::{NegotiationDecision, NegotiationRecord};
use serde::{Deserialize, Serialize};

/// Decision counts across a set of negotiation records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NegotiationSummary {
	pub total: usize,
	pub accepted: usize,
	pub countered: usize,
	pub rejected: usize,
}

impl NegotiationSummary {
	pub fn from_records(records: &[NegotiationRecord]) -> Self {
		let mut summary = Self {
			total: records.len(),
			..Self::default()
		};
		for record in records {
			match record.decision {
				NegotiationDecision::Accept => summary.accepted += 1,
				NegotiationDecision::Counter => summary.countered += 1,
				NegotiationDecision::Reject => summary.rejected += 1,
			}
		}
		summary
	}
}

/// API response body for GET /v1/negotiations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationHistoryResponse {
	pub records: Vec<NegotiationRecord>,
	pub summary: NegotiationSummary,
}

impl NegotiationHistoryResponse {
	pub fn new(records: Vec<NegotiationRecord>) -> Self {
		let summary = NegotiationSummary::from_records(&records);
		Self { records, summary }
	}
}
