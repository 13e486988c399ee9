//! Load search response model

use super::Load;
use serde::{Deserialize, Serialize};

/// API response body for the /v1/loads/search endpoint
///
/// `loads` is already ranked (highest posted rate first) and capped at the
/// pitch limit; `total_matched` reports how many loads matched before the cap
/// so the caller can say "best three of eleven".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSearchResponse {
	pub loads: Vec<Load>,
	pub total_matched: usize,
	pub returned: usize,
}

impl LoadSearchResponse {
	pub fn new(loads: Vec<Load>, total_matched: usize) -> Self {
		let returned = loads.len();
		Self {
			loads,
			total_matched,
			returned,
		}
	}
}
