//! Negotiation service
//!
//! Evaluates carrier offers against the posted board rate. The policy is
//! a fixed two-threshold ladder derived from the board rate: offers at or
//! above the acceptance floor are taken, offers below the walk-away floor
//! are refused with the walk-away quoted back, and everything in between
//! draws a counter at the midpoint (never below the acceptance floor).
//!
//! Offers arrive over a phone transcription pipeline, so a repair step
//! runs first: an offer that reads ten times too large for the lane is
//! scaled back down before the thresholds apply.

use std::sync::Arc;

use async_trait::async_trait;
use haul_storage::Storage;
use haul_types::constants::limits::{
	ACCEPT_RATIO, OFFER_REPAIR_MAX_BOARD_RATE, OFFER_REPAIR_MIN_BOARD_RATE,
	OFFER_REPAIR_THRESHOLD, OFFER_REPAIR_TOLERANCE_RATIO, WALK_AWAY_RATIO,
};
use haul_types::{
	NegotiationDecision, NegotiationError, NegotiationHistoryResponse, NegotiationNotes,
	NegotiationOutcome, NegotiationRecord, NegotiationRequest, NegotiationResult,
};
use tracing::{debug, warn};

/// Trait for negotiation operations
#[async_trait]
pub trait NegotiationServiceTrait: Send + Sync {
	/// Evaluate a carrier offer against a posted load and record the outcome
	async fn negotiate(
		&self,
		request: &NegotiationRequest,
	) -> NegotiationResult<NegotiationOutcome>;

	/// Return every recorded negotiation with summary counts
	async fn history(&self) -> NegotiationResult<NegotiationHistoryResponse>;
}

/// Negotiation service backed by the load and record stores
#[derive(Clone)]
pub struct NegotiationService {
	storage: Arc<dyn Storage>,
}

impl NegotiationService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}
}

/// Repairs transcription slips where an offer came through ten times too
/// large ("twenty-one hundred" heard as 21000).
///
/// The repair only fires when the lane's board rate sits in the typical
/// spot-market window and the offer clears the implausibility threshold.
/// The scaled-down value is used only when it lands within half the board
/// rate of the posted price; otherwise the offer stands as heard.
/// Non-finite offers pass through untouched for the thresholds to handle.
pub fn normalize_offer(raw_offer: f64, board_rate: f64) -> f64 {
	if !raw_offer.is_finite() {
		return raw_offer;
	}
	let window = OFFER_REPAIR_MIN_BOARD_RATE..=OFFER_REPAIR_MAX_BOARD_RATE;
	if !window.contains(&board_rate) || raw_offer < OFFER_REPAIR_THRESHOLD {
		return raw_offer;
	}
	let ten_x_corrected = (raw_offer / 10.0).round();
	if (ten_x_corrected - board_rate).abs() <= OFFER_REPAIR_TOLERANCE_RATIO * board_rate {
		ten_x_corrected
	} else {
		raw_offer
	}
}

/// Applies the threshold ladder to a single offer.
///
/// The notes always carry the numbers the decision was made from,
/// including the offer as originally heard (pre-repair), so a transcript
/// reviewer can reconstruct the call.
pub fn evaluate(load_id: &str, board_rate: f64, raw_offer: f64) -> NegotiationOutcome {
	let offer = normalize_offer(raw_offer, board_rate);
	let min_accept = (board_rate * ACCEPT_RATIO).round();
	let walk_away = (board_rate * WALK_AWAY_RATIO).round();

	let (decision, price) = if offer >= min_accept {
		(NegotiationDecision::Accept, offer)
	} else if offer < walk_away {
		(NegotiationDecision::Reject, walk_away)
	} else {
		// f64::max ignores a NaN midpoint, leaving the acceptance floor.
		let midpoint = ((board_rate + offer) / 2.0).round();
		(NegotiationDecision::Counter, min_accept.max(midpoint))
	};

	NegotiationOutcome {
		load_id: load_id.to_string(),
		decision,
		price,
		notes: NegotiationNotes {
			board_rate,
			min_accept,
			walk_away,
			raw_offer,
		},
	}
}

#[async_trait]
impl NegotiationServiceTrait for NegotiationService {
	async fn negotiate(
		&self,
		request: &NegotiationRequest,
	) -> NegotiationResult<NegotiationOutcome> {
		let load_id = request
			.load_id
			.as_deref()
			.map(str::trim)
			.filter(|id| !id.is_empty())
			.ok_or_else(|| NegotiationError::InvalidInput {
				reason: "load_id is required".to_string(),
			})?;

		let load = self
			.storage
			.get_load(load_id)
			.await
			.map_err(|e| NegotiationError::Storage {
				message: e.to_string(),
			})?
			.ok_or_else(|| NegotiationError::LoadNotFound {
				load_id: load_id.to_string(),
			})?;

		let outcome = evaluate(load_id, load.loadboard_rate, request.carrier_offer);
		debug!(
			"Negotiation for {}: {} at {} against board rate {}",
			load_id, outcome.decision, outcome.price, load.loadboard_rate
		);

		// Recording is best effort: a full audit trail is worth less than
		// answering the carrier while they are still on the line.
		let record = NegotiationRecord::new(
			outcome.clone(),
			request.mc_number.clone(),
			request.session_id.clone(),
		);
		if let Err(e) = self.storage.append_record(record).await {
			warn!("Failed to record negotiation for {}: {}", load_id, e);
		}

		Ok(outcome)
	}

	async fn history(&self) -> NegotiationResult<NegotiationHistoryResponse> {
		let records = self
			.storage
			.list_records()
			.await
			.map_err(|e| NegotiationError::Storage {
				message: e.to_string(),
			})?;
		Ok(NegotiationHistoryResponse::new(records))
	}
}
