//! Core authentication and authorization traits

use super::errors::AuthError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authentication result with client context
#[derive(Debug, Clone)]
pub enum AuthenticationResult {
	/// Authentication successful with client context
	Authorized(AuthContext),
	/// Authentication failed
	Unauthorized(String),
	/// Authentication disabled or not applicable for this deployment
	Bypassed,
}

/// Authenticated client context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
	/// Identifier of the authenticated client (e.g. "voice-agent")
	pub client_id: String,
	/// Permissions granted to this client
	pub permissions: Vec<Permission>,
	/// When this context was created
	pub created_at: DateTime<Utc>,
}

/// Authorization permissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Permission {
	/// Search the load board
	SearchLoads,
	/// Submit carrier offers for evaluation
	Negotiate,
	/// Read recorded negotiation outcomes
	ReadNegotiations,
	/// Verify carrier eligibility
	VerifyCarriers,
	/// Admin operations
	Admin,
}

impl AuthContext {
	/// Create a new auth context
	pub fn new(client_id: String) -> Self {
		Self {
			client_id,
			permissions: Vec::new(),
			created_at: Utc::now(),
		}
	}

	/// Check if the client has a specific permission
	pub fn has_permission(&self, permission: &Permission) -> bool {
		self.permissions.contains(permission)
	}

	/// Add a permission to the context
	pub fn with_permission(mut self, permission: Permission) -> Self {
		self.permissions.push(permission);
		self
	}
}

/// Authentication request context
#[derive(Debug, Clone)]
pub struct AuthRequest {
	/// HTTP headers, lower-cased names
	pub headers: HashMap<String, String>,
	/// Request path
	pub path: String,
	/// HTTP method
	pub method: String,
}

impl AuthRequest {
	/// Create a new auth request from HTTP components
	pub fn new(method: String, path: String) -> Self {
		Self {
			headers: HashMap::new(),
			path,
			method,
		}
	}

	/// Add a header
	pub fn with_header(mut self, key: String, value: String) -> Self {
		self.headers.insert(key, value);
		self
	}

	/// Get header value
	pub fn get_header(&self, key: &str) -> Option<&String> {
		self.headers.get(key)
	}

	/// Get API key from headers
	pub fn get_api_key(&self) -> Option<&String> {
		self.get_header("x-api-key")
			.or_else(|| self.get_header("X-API-Key"))
			.filter(|key| !key.is_empty())
	}
}

/// Core authentication trait for custom auth implementations
#[async_trait]
pub trait Authenticator: Send + Sync + std::fmt::Debug {
	/// Authenticate a request and return client context
	async fn authenticate(&self, request: &AuthRequest) -> AuthenticationResult;

	/// Check if the client has permission for a specific action
	async fn authorize(&self, context: &AuthContext, permission: &Permission) -> bool;

	/// Health check for the auth backend
	async fn health_check(&self) -> Result<bool, AuthError>;

	/// Human-readable name for this authenticator
	fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_auth_context_permissions() {
		let context = AuthContext::new("voice-agent".to_string())
			.with_permission(Permission::SearchLoads)
			.with_permission(Permission::Negotiate);

		assert!(context.has_permission(&Permission::SearchLoads));
		assert!(context.has_permission(&Permission::Negotiate));
		assert!(!context.has_permission(&Permission::Admin));
	}

	#[test]
	fn test_auth_request_api_key_lookup() {
		let request = AuthRequest::new("POST".to_string(), "/v1/loads/search".to_string())
			.with_header("x-api-key".to_string(), "secret-key".to_string());

		assert_eq!(request.get_api_key().map(String::as_str), Some("secret-key"));
	}

	#[test]
	fn test_auth_request_empty_api_key_is_missing() {
		let request = AuthRequest::new("POST".to_string(), "/v1/loads/search".to_string())
			.with_header("x-api-key".to_string(), String::new());

		assert!(request.get_api_key().is_none());
	}
}
