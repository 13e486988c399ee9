//! Authentication middleware using the auth traits

use axum::{
	extract::Request,
	http::{HeaderMap, StatusCode},
	middleware::Next,
	response::Response,
};
use haul_types::auth::{AuthRequest, AuthenticationResult, Authenticator, Permission};
use std::sync::Arc;
use tracing::{debug, warn};

/// Auth middleware configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
	/// Path prefixes that require authentication
	pub protected_paths: Vec<String>,
	/// Path prefixes that are completely public (no auth check)
	pub public_paths: Vec<String>,
}

impl Default for AuthConfig {
	fn default() -> Self {
		Self {
			protected_paths: vec!["/v1/".to_string()],
			public_paths: vec!["/health".to_string()],
		}
	}
}

/// Authentication middleware function
pub async fn auth_middleware(
	authenticator: Arc<dyn Authenticator>,
	config: AuthConfig,
	request: Request,
	next: Next,
) -> Result<Response, StatusCode> {
	let path = request.uri().path().to_string();
	let method = request.method().to_string();

	// Check if path is public
	if config.public_paths.iter().any(|p| path.starts_with(p)) {
		debug!("Public path {}, skipping auth", path);
		return Ok(next.run(request).await);
	}

	let headers = headers_to_map(request.headers());

	let auth_request = AuthRequest::new(method.clone(), path.clone())
		.with_header(
			"authorization".to_string(),
			headers
				.get("authorization")
				.unwrap_or(&String::new())
				.clone(),
		)
		.with_header(
			"x-api-key".to_string(),
			headers.get("x-api-key").unwrap_or(&String::new()).clone(),
		);

	let protected = config.protected_paths.iter().any(|p| path.starts_with(p));

	let auth_context = match authenticator.authenticate(&auth_request).await {
		AuthenticationResult::Bypassed => {
			debug!("Authentication bypassed for path: {}", path);
			return Ok(next.run(request).await);
		},
		AuthenticationResult::Authorized(context) => {
			debug!("Request authenticated for client: {}", context.client_id);
			Some(context)
		},
		AuthenticationResult::Unauthorized(reason) => {
			if protected {
				warn!("Authentication failed for path {}: {}", path, reason);
				return Err(StatusCode::UNAUTHORIZED);
			}
			None
		},
	};

	if protected {
		if let Some(ref context) = auth_context {
			let required = required_permission(&path, &method);
			if !authenticator.authorize(context, &required).await {
				warn!(
					"Authorization failed for client {} on path {}",
					context.client_id, path
				);
				return Err(StatusCode::FORBIDDEN);
			}
		} else {
			// Protected path but no auth context
			return Err(StatusCode::UNAUTHORIZED);
		}
	}

	// Add auth context to request extensions if available
	let mut request = request;
	if let Some(context) = auth_context {
		request.extensions_mut().insert(context);
	}

	Ok(next.run(request).await)
}

/// Permission a route demands, keyed on path prefix and method
fn required_permission(path: &str, method: &str) -> Permission {
	match (path, method) {
		(p, _) if p.starts_with("/v1/loads") => Permission::SearchLoads,
		(p, "POST") if p.starts_with("/v1/negotiations") => Permission::Negotiate,
		(p, "GET") if p.starts_with("/v1/negotiations") => Permission::ReadNegotiations,
		(p, _) if p.starts_with("/v1/carriers") => Permission::VerifyCarriers,
		_ => Permission::SearchLoads,
	}
}

/// Helper function to convert HeaderMap to HashMap<String, String>
fn headers_to_map(headers: &HeaderMap) -> std::collections::HashMap<String, String> {
	let mut map = std::collections::HashMap::new();

	for (name, value) in headers.iter() {
		if let Ok(value_str) = value.to_str() {
			map.insert(name.as_str().to_lowercase(), value_str.to_string());
		}
	}

	map
}
