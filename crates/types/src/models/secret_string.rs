//! Secure string handling for credentials
//!
//! Holds the service API key and the registry web key. The wrapped value is
//! zeroized on drop and redacted in every Debug/Display/Serialize path so a
//! stray log line cannot leak it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string that zeroizes its contents when dropped
///
/// # Examples
///
/// ```rust
/// use haul_types::SecretString;
///
/// let web_key = SecretString::new("fmcsa-web-key-12345".to_string());
/// assert_eq!(format!("{}", web_key), "[REDACTED]");
///
/// // Access the value only where it is actually sent
/// let _query_param = web_key.expose_secret();
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	/// Create a new `SecretString` from a `String`
	pub fn new(secret: String) -> Self {
		Self { inner: secret }
	}

	/// Expose the secret value
	///
	/// Use sparingly: the returned slice is the live credential.
	pub fn expose_secret(&self) -> &str {
		&self.inner
	}

	/// Length of the secret without exposing it
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Check if the secret is empty without exposing it
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretString")
			.field("inner", &"[REDACTED]")
			.finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[REDACTED]")
	}
}

impl From<String> for SecretString {
	fn from(secret: String) -> Self {
		Self::new(secret)
	}
}

impl From<&str> for SecretString {
	fn from(secret: &str) -> Self {
		Self::new(secret.to_string())
	}
}

// Serialization always redacts; secrets leave the process only via
// expose_secret at the call site that needs them.
impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("[REDACTED]")
	}
}

// Deserialization accepts the raw value so secrets can load from config
impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let secret = String::deserialize(deserializer)?;
		Ok(SecretString::new(secret))
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		constant_time_eq(self.inner.as_bytes(), other.inner.as_bytes())
	}
}

impl Eq for SecretString {}

/// Constant-time comparison so key checks don't leak length-prefix timing
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}

	let mut result = 0u8;
	for (x, y) in a.iter().zip(b.iter()) {
		result |= x ^ y;
	}
	result == 0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_secret_string_creation() {
		let secret = SecretString::new("web-key".to_string());
		assert_eq!(secret.expose_secret(), "web-key");
		assert_eq!(secret.len(), 7);
		assert!(!secret.is_empty());
	}

	#[test]
	fn test_debug_and_display_redact() {
		let secret = SecretString::from("api-key-123");
		assert!(format!("{:?}", secret).contains("[REDACTED]"));
		assert!(!format!("{:?}", secret).contains("api-key-123"));
		assert_eq!(format!("{}", secret), "[REDACTED]");
	}

	#[test]
	fn test_serialization_redacts() {
		let secret = SecretString::from("api-key-123");
		assert_eq!(serde_json::to_string(&secret).unwrap(), "\"[REDACTED]\"");
	}

	#[test]
	fn test_deserialization_keeps_value() {
		let secret: SecretString = serde_json::from_str("\"loaded-key\"").unwrap();
		assert_eq!(secret.expose_secret(), "loaded-key");
	}

	#[test]
	fn test_equality() {
		let a = SecretString::from("same");
		let b = SecretString::from("same");
		let c = SecretString::from("different");
		assert_eq!(a, b);
		assert_ne!(a, c);
	}
}
