use axum::{
	routing::{get, post},
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{
	get_carrier, get_load, get_negotiations, health, post_negotiations, search_loads,
};
use crate::security::add_security_headers;
use crate::state::AppState;
// State is applied at the application level using `.with_state(...)`.

pub fn create_router() -> Router<AppState> {
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(1024 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	// Routes are registered with and without a trailing slash; phone-agent
	// webhook tooling is not consistent about which one it sends.
	let router = Router::new()
		.route("/health", get(health))
		.route("/health/", get(health))
		.route("/v1/loads/search", post(search_loads))
		.route("/v1/loads/search/", post(search_loads))
		.route("/v1/loads/{load_id}", get(get_load))
		.route("/v1/loads/{load_id}/", get(get_load))
		.route("/v1/negotiations", post(post_negotiations).get(get_negotiations))
		.route("/v1/negotiations/", post(post_negotiations).get(get_negotiations))
		.route("/v1/carriers/{mc_number}", get(get_carrier))
		.route("/v1/carriers/{mc_number}/", get(get_carrier));

	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit);

	add_security_headers(router)
}
