//! Security-related HTTP response headers setup

use axum::{
	http::header::{HeaderName, HeaderValue},
	Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers applied to every response unless a handler already set them.
static SECURITY_HEADERS: [(&str, &str); 7] = [
	(
		"strict-transport-security",
		"max-age=31536000; includeSubDomains; preload",
	),
	("x-content-type-options", "nosniff"),
	("x-frame-options", "DENY"),
	("referrer-policy", "strict-origin-when-cross-origin"),
	("x-xss-protection", "1; mode=block"),
	("content-security-policy", "default-src 'self'"),
	("cache-control", "no-cache"),
];

/// Apply a stack of sensible default security headers to the provided router.
pub fn add_security_headers<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	SECURITY_HEADERS
		.into_iter()
		.fold(router, |router, (name, value)| {
			router.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static(name),
				HeaderValue::from_static(value),
			))
		})
}
