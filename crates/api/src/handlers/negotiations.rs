//! Negotiation handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use haul_types::{
	NegotiationError, NegotiationHistoryResponse, NegotiationOutcome, NegotiationRequest,
};

/// POST /v1/negotiations - Evaluate a carrier offer against a posted load
pub async fn post_negotiations(
	State(state): State<AppState>,
	Json(request): Json<NegotiationRequest>,
) -> Result<Json<NegotiationOutcome>, (StatusCode, Json<ErrorResponse>)> {
	info!(
		"Carrier offer {} received for load {:?}",
		request.carrier_offer, request.load_id
	);

	let outcome = state
		.negotiation_service
		.negotiate(&request)
		.await
		.map_err(|e| match e {
			NegotiationError::InvalidInput { reason } => (
				StatusCode::BAD_REQUEST,
				Json(ErrorResponse::new("INVALID_INPUT", reason)),
			),
			NegotiationError::LoadNotFound { load_id } => (
				StatusCode::NOT_FOUND,
				Json(ErrorResponse::new(
					"LOAD_NOT_FOUND",
					format!("Load {} not found", load_id),
				)),
			),
			NegotiationError::Storage { message } => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("STORAGE_ERROR", message)),
			),
		})?;

	info!(
		"Negotiation for load {} decided: {} at {}",
		outcome.load_id, outcome.decision, outcome.price
	);
	Ok(Json(outcome))
}

/// GET /v1/negotiations - Negotiation history with summary counts
pub async fn get_negotiations(
	State(state): State<AppState>,
) -> Result<Json<NegotiationHistoryResponse>, (StatusCode, Json<ErrorResponse>)> {
	let history = state
		.negotiation_service
		.history()
		.await
		.map_err(|e| match e {
			NegotiationError::Storage { message } => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("STORAGE_ERROR", message)),
			),
			other => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("INTERNAL_ERROR", other.to_string())),
			),
		})?;

	Ok(Json(history))
}
