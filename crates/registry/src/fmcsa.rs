//! FMCSA registry client
//!
//! Looks up carrier authority by MC (docket) number against the FMCSA
//! QCMobile API. The API authenticates with a `webKey` query parameter
//! and answers docket lookups with a `content` array of carrier
//! records; a carrier is eligible when it is allowed to operate.
//!
//! Network failures, timeouts and server errors all map to
//! [`RegistryError::Unavailable`] so callers can degrade gracefully
//! during a registry outage.

use std::time::Duration;

use async_trait::async_trait;
use haul_types::constants::limits::DEFAULT_REGISTRY_TIMEOUT_MS;
use haul_types::{
	CarrierEligibility, CarrierRegistry, EligibilitySource, RegistryError, RegistryResult,
	SecretString,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// Client for the FMCSA QCMobile carrier API
#[derive(Debug, Clone)]
pub struct FmcsaClient {
	client: Client,
	endpoint: String,
	web_key: SecretString,
}

/// Docket lookup response models, matching the QCMobile wire shape
#[derive(Debug, Deserialize)]
struct DocketResponse {
	content: Option<Vec<DocketEntry>>,
}

#[derive(Debug, Deserialize)]
struct DocketEntry {
	carrier: Option<CarrierRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CarrierRecord {
	legal_name: Option<String>,
	dba_name: Option<String>,
	allowed_to_operate: Option<String>,
	status_code: Option<String>,
}

impl FmcsaClient {
	/// Create a client for the given QCMobile base endpoint
	pub fn new(endpoint: &str, web_key: SecretString, timeout_ms: u64) -> RegistryResult<Self> {
		let endpoint = url::Url::parse(endpoint)
			.map_err(|e| RegistryError::Configuration {
				reason: format!("Invalid registry endpoint '{}': {}", endpoint, e),
			})?
			.to_string();
		let client = Client::builder()
			.timeout(Duration::from_millis(timeout_ms))
			.build()
			.map_err(|e| RegistryError::Configuration {
				reason: e.to_string(),
			})?;
		Ok(Self {
			client,
			endpoint,
			web_key,
		})
	}

	/// Create a client with the default lookup timeout
	pub fn with_default_timeout(endpoint: &str, web_key: SecretString) -> RegistryResult<Self> {
		Self::new(endpoint, web_key, DEFAULT_REGISTRY_TIMEOUT_MS)
	}
}

/// Maps a docket response to the carrier's eligibility. The first entry
/// carrying a carrier record wins; an empty response means the MC
/// number has no docket.
fn eligibility_from_response(
	mc_number: &str,
	response: DocketResponse,
) -> RegistryResult<CarrierEligibility> {
	let carrier = response
		.content
		.unwrap_or_default()
		.into_iter()
		.find_map(|entry| entry.carrier)
		.ok_or_else(|| RegistryError::NotFound {
			mc_number: mc_number.to_string(),
		})?;

	Ok(CarrierEligibility {
		mc_number: mc_number.to_string(),
		carrier_name: carrier.legal_name.or(carrier.dba_name),
		eligible: carrier.allowed_to_operate.as_deref() == Some("Y"),
		operating_status: carrier.status_code,
		source: EligibilitySource::Registry,
	})
}

#[async_trait]
impl CarrierRegistry for FmcsaClient {
	async fn lookup_carrier(&self, mc_number: &str) -> RegistryResult<CarrierEligibility> {
		if self.web_key.is_empty() {
			return Err(RegistryError::Unavailable {
				reason: "no registry web key configured".to_string(),
			});
		}

		let url = format!(
			"{}/carriers/docket-number/{}",
			self.endpoint.trim_end_matches('/'),
			mc_number
		);
		let response = self
			.client
			.get(&url)
			.query(&[("webKey", self.web_key.expose_secret())])
			.send()
			.await
			.map_err(|e| RegistryError::Unavailable {
				reason: e.to_string(),
			})?;

		let status = response.status();
		if status == StatusCode::NOT_FOUND {
			return Err(RegistryError::NotFound {
				mc_number: mc_number.to_string(),
			});
		}
		if status.is_server_error() {
			return Err(RegistryError::Unavailable {
				reason: format!("registry answered {}", status),
			});
		}
		if !status.is_success() {
			return Err(RegistryError::Http {
				status: status.as_u16(),
			});
		}

		let body: DocketResponse =
			response
				.json()
				.await
				.map_err(|e| RegistryError::InvalidResponse {
					reason: e.to_string(),
				})?;

		let eligibility = eligibility_from_response(mc_number, body)?;
		debug!(
			"FMCSA answered for MC {}: eligible={}",
			mc_number, eligibility.eligible
		);
		Ok(eligibility)
	}

	fn name(&self) -> &str {
		"fmcsa"
	}
}
