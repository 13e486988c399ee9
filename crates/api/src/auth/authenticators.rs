//! Authentication implementations

use haul_types::auth::{
	errors::AuthError,
	traits::{AuthContext, AuthRequest, AuthenticationResult, Authenticator, Permission},
};

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// No-op authenticator that allows all requests
#[derive(Debug, Default)]
pub struct NoAuthenticator;

#[async_trait]
impl Authenticator for NoAuthenticator {
	async fn authenticate(&self, _request: &AuthRequest) -> AuthenticationResult {
		debug!("NoAuthenticator: bypassing authentication");
		AuthenticationResult::Bypassed
	}

	async fn authorize(&self, _context: &AuthContext, _permission: &Permission) -> bool {
		true
	}

	async fn health_check(&self) -> Result<bool, AuthError> {
		Ok(true)
	}

	fn name(&self) -> &str {
		"NoAuthenticator"
	}
}

/// Simple API key authenticator
#[derive(Debug)]
pub struct ApiKeyAuthenticator {
	/// Valid API keys mapped to client contexts
	api_keys: Arc<DashMap<String, AuthContext>>,
}

impl ApiKeyAuthenticator {
	/// Create a new API key authenticator with no keys
	pub fn new() -> Self {
		Self {
			api_keys: Arc::new(DashMap::new()),
		}
	}

	/// Add an API key with associated context
	pub fn add_key(&self, api_key: String, context: AuthContext) {
		self.api_keys.insert(api_key, context);
	}

	/// Remove an API key
	pub fn remove_key(&self, api_key: &str) -> Option<AuthContext> {
		self.api_keys.remove(api_key).map(|(_, context)| context)
	}

	/// Create with a single key granting every broker operation
	pub fn with_key(api_key: String, client_id: &str) -> Self {
		let auth = Self::new();
		let context = AuthContext::new(client_id.to_string())
			.with_permission(Permission::SearchLoads)
			.with_permission(Permission::Negotiate)
			.with_permission(Permission::ReadNegotiations)
			.with_permission(Permission::VerifyCarriers);

		auth.add_key(api_key, context);
		auth
	}
}

#[async_trait]
impl Authenticator for ApiKeyAuthenticator {
	async fn authenticate(&self, request: &AuthRequest) -> AuthenticationResult {
		if let Some(api_key) = request.get_api_key() {
			if let Some(context) = self.api_keys.get(api_key) {
				debug!("API key authenticated for client {}", context.client_id);
				return AuthenticationResult::Authorized(context.clone());
			}
		}

		AuthenticationResult::Unauthorized("Invalid or missing API key".to_string())
	}

	async fn authorize(&self, context: &AuthContext, permission: &Permission) -> bool {
		// Admin can do anything
		if context.has_permission(&Permission::Admin) {
			return true;
		}

		context.has_permission(permission)
	}

	async fn health_check(&self) -> Result<bool, AuthError> {
		Ok(true)
	}

	fn name(&self) -> &str {
		"ApiKeyAuthenticator"
	}
}

impl Default for ApiKeyAuthenticator {
	fn default() -> Self {
		Self::new()
	}
}
