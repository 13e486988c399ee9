//! Load board handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use tracing::{debug, info};

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use haul_types::{Load, LoadSearchRequest, LoadSearchResponse, SearchError};

/// POST /v1/loads/search - Search the load board
pub async fn search_loads(
	State(state): State<AppState>,
	Json(request): Json<LoadSearchRequest>,
) -> Result<Json<LoadSearchResponse>, (StatusCode, Json<ErrorResponse>)> {
	debug!(
		"Load search received: origin={:?} destination={:?} equipment={:?}",
		request.origin, request.destination, request.equipment_type
	);

	let response = state
		.search_service
		.search_loads(&request)
		.await
		.map_err(|e| match e {
			SearchError::Storage(e) => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("STORAGE_ERROR", e.to_string())),
			),
		})?;

	info!(
		"Load search returned {} of {} matched loads",
		response.returned, response.total_matched
	);
	Ok(Json(response))
}

/// GET /v1/loads/{load_id} - Fetch a single posted load
pub async fn get_load(
	State(state): State<AppState>,
	Path(load_id): Path<String>,
) -> Result<Json<Load>, (StatusCode, Json<ErrorResponse>)> {
	match state.storage.get_load(&load_id).await {
		Ok(Some(load)) => Ok(Json(load)),
		Ok(None) => Err((
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"LOAD_NOT_FOUND",
				format!("Load {} not found", load_id),
			)),
		)),
		Err(e) => Err((
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("STORAGE_ERROR", e.to_string())),
		)),
	}
}
