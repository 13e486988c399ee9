//! Load search request model

use serde::{Deserialize, Serialize};

/// API request body for the /v1/loads/search endpoint
///
/// Every filter is optional; an absent or empty field is a wildcard. Callers
/// are voice agents assembling criteria mid-call, so the shape is deliberately
/// lenient: unknown fields are ignored and nothing is required.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoadSearchRequest {
	/// Preferred pickup place, free text ("Dallas", "Dallas, TX", ...)
	pub origin: Option<String>,
	/// Preferred delivery place, free text
	pub destination: Option<String>,
	/// Equipment the carrier runs, free text ("van", "reefer", ...)
	pub equipment_type: Option<String>,
	/// Earliest pickup the carrier mentioned. Carried for call context only;
	/// it never constrains the result set.
	pub pickup_datetime: Option<String>,
}

impl LoadSearchRequest {
	/// True when no filter field carries a usable value
	pub fn is_wildcard(&self) -> bool {
		fn blank(field: &Option<String>) -> bool {
			field.as_deref().map_or(true, |v| v.trim().is_empty())
		}

		blank(&self.origin) && blank(&self.destination) && blank(&self.equipment_type)
	}
}
