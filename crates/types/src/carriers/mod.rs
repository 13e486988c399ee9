//! Carrier eligibility domain models
//!
//! Before a broker books a carrier it checks the carrier's federal operating
//! authority by MC number. The lookup is advisory: when the upstream registry
//! is unreachable the service answers with a permissive fallback rather than
//! blocking the call, and `source` tells the consumer which one it got.

pub mod errors;
pub mod traits;

pub use errors::{RegistryError, RegistryResult};
pub use traits::CarrierRegistry;

use crate::constants::limits::MAX_MC_NUMBER_DIGITS;
use serde::{Deserialize, Serialize};

/// Where an eligibility answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilitySource {
	/// Answer returned by the upstream registry
	Registry,
	/// Permissive default used when the registry was unavailable
	Fallback,
}

/// Eligibility verdict for one carrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierEligibility {
	pub mc_number: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub carrier_name: Option<String>,
	pub eligible: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub operating_status: Option<String>,
	pub source: EligibilitySource,
}

impl CarrierEligibility {
	/// Permissive answer used when the registry cannot be reached
	pub fn fallback(mc_number: &str) -> Self {
		Self {
			mc_number: mc_number.to_string(),
			carrier_name: None,
			eligible: true,
			operating_status: None,
			source: EligibilitySource::Fallback,
		}
	}
}

/// Reduce a spoken or typed MC number to its digits
///
/// "MC-123456", "mc 123456" and "#123456" all become "123456". Returns `None`
/// when no digits remain or the digit count exceeds what the registry issues.
pub fn normalize_mc_number(raw: &str) -> Option<String> {
	let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
	if digits.is_empty() || digits.len() > MAX_MC_NUMBER_DIGITS {
		return None;
	}
	Some(digits)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_strips_prefixes_and_punctuation() {
		assert_eq!(normalize_mc_number("MC-123456").as_deref(), Some("123456"));
		assert_eq!(normalize_mc_number("mc 987654").as_deref(), Some("987654"));
		assert_eq!(normalize_mc_number("#44321").as_deref(), Some("44321"));
		assert_eq!(normalize_mc_number("  123456  ").as_deref(), Some("123456"));
	}

	#[test]
	fn test_normalize_rejects_digitless_input() {
		assert!(normalize_mc_number("").is_none());
		assert!(normalize_mc_number("unknown").is_none());
		assert!(normalize_mc_number("MC-").is_none());
	}

	#[test]
	fn test_normalize_rejects_oversized_numbers() {
		assert!(normalize_mc_number("123456789012").is_none());
	}

	#[test]
	fn test_fallback_is_permissive() {
		let eligibility = CarrierEligibility::fallback("123456");
		assert!(eligibility.eligible);
		assert_eq!(eligibility.source, EligibilitySource::Fallback);
		assert!(eligibility.carrier_name.is_none());
	}

	#[test]
	fn test_source_serializes_lowercase() {
		assert_eq!(
			serde_json::to_string(&EligibilitySource::Fallback).unwrap(),
			"\"fallback\""
		);
	}
}
