//! Authentication error types

use thiserror::Error;

/// Authentication and authorization errors
#[derive(Error, Debug, Clone)]
pub enum AuthError {
	#[error("Authentication failed: {0}")]
	AuthenticationFailed(String),

	#[error("Authorization denied: {0}")]
	AuthorizationDenied(String),

	#[error("Auth service unavailable: {0}")]
	ServiceUnavailable(String),

	#[error("Configuration error: {0}")]
	ConfigurationError(String),
}
