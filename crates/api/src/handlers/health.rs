use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::state::AppState;

/// Health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: String,
	pub version: String,
	pub storage_healthy: bool,
	pub timestamp: i64,
}

/// GET /health - Liveness probe with a storage check
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
	let storage_healthy = state.storage.health_check().await.unwrap_or(false);

	let status = if storage_healthy { "healthy" } else { "degraded" };
	let code = if storage_healthy {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};

	let body = HealthResponse {
		status: status.to_string(),
		version: env!("CARGO_PKG_VERSION").to_string(),
		storage_healthy,
		timestamp: chrono::Utc::now().timestamp(),
	};
	(code, Json(body))
}
