//! Carrier eligibility handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use tracing::info;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use haul_types::{CarrierEligibility, RegistryError};

/// GET /v1/carriers/{mc_number} - Verify a carrier's operating authority
pub async fn get_carrier(
	State(state): State<AppState>,
	Path(mc_number): Path<String>,
) -> Result<Json<CarrierEligibility>, (StatusCode, Json<ErrorResponse>)> {
	let eligibility = state
		.carrier_service
		.verify_carrier(&mc_number)
		.await
		.map_err(|e| match e {
			RegistryError::InvalidMcNumber { value } => (
				StatusCode::BAD_REQUEST,
				Json(ErrorResponse::new(
					"INVALID_MC_NUMBER",
					format!("Unusable MC number '{}'", value),
				)),
			),
			RegistryError::NotFound { mc_number } => (
				StatusCode::NOT_FOUND,
				Json(ErrorResponse::new(
					"CARRIER_NOT_FOUND",
					format!("No carrier on file for MC {}", mc_number),
				)),
			),
			// The service degrades outages to a fallback answer; this arm only
			// fires if that policy ever changes.
			RegistryError::Unavailable { reason } => (
				StatusCode::SERVICE_UNAVAILABLE,
				Json(ErrorResponse::new("REGISTRY_UNAVAILABLE", reason)),
			),
			RegistryError::InvalidResponse { reason } => (
				StatusCode::BAD_GATEWAY,
				Json(ErrorResponse::new("REGISTRY_ERROR", reason)),
			),
			RegistryError::Http { status } => (
				StatusCode::BAD_GATEWAY,
				Json(ErrorResponse::new(
					"REGISTRY_ERROR",
					format!("Registry answered status {}", status),
				)),
			),
			RegistryError::Configuration { reason } => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("REGISTRY_CONFIGURATION", reason)),
			),
		})?;

	info!(
		"Carrier {} verified: eligible={} source={:?}",
		eligibility.mc_number, eligibility.eligible, eligibility.source
	);
	Ok(Json(eligibility))
}
