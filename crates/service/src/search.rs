//! Load search service
//!
//! Filters the posted board against caller criteria and ranks what is
//! left by rate. Matching is deliberately lenient: empty criteria are
//! wildcards and place/equipment comparisons tolerate the loose phrasing
//! carriers use on the phone. A search never fails over imperfect input;
//! the worst case is an empty result list.

use std::sync::Arc;

use async_trait::async_trait;
use haul_storage::Storage;
use haul_types::constants::limits::MAX_SEARCH_RESULTS;
use haul_types::{Load, LoadSearchRequest, LoadSearchResponse, SearchResult};
use tracing::debug;

use crate::{equipment, place};

/// Trait for load search operations
#[async_trait]
pub trait SearchServiceTrait: Send + Sync {
	/// Filter the board against the request and return the ranked top matches
	async fn search_loads(&self, request: &LoadSearchRequest) -> SearchResult<LoadSearchResponse>;
}

/// Search service backed by the load store
#[derive(Clone)]
pub struct LoadSearchService {
	storage: Arc<dyn Storage>,
}

impl LoadSearchService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}
}

/// True when the load satisfies every criterion in the request.
///
/// `pickup_datetime` is accepted on the request but never filtered on:
/// board postings rarely carry timestamps clean enough to compare, and
/// dropping a good lane over date formatting loses the booking.
fn matches_request(load: &Load, request: &LoadSearchRequest) -> bool {
	place::matches(&load.origin, request.origin.as_deref().unwrap_or(""))
		&& place::matches(&load.destination, request.destination.as_deref().unwrap_or(""))
		&& equipment::matches(
			&load.equipment_type,
			request.equipment_type.as_deref().unwrap_or(""),
		)
}

/// Rate used for ranking only. Non-finite rates order as zero; the
/// stored value is returned to the caller untouched.
fn effective_rate(rate: f64) -> f64 {
	if rate.is_finite() {
		rate
	} else {
		0.0
	}
}

/// Sorts matches by rate, highest first, and keeps the top entries.
/// The sort is stable, so equal-rate loads keep their board order.
fn rank(mut matched: Vec<Load>) -> Vec<Load> {
	matched.sort_by(|a, b| {
		effective_rate(b.loadboard_rate).total_cmp(&effective_rate(a.loadboard_rate))
	});
	matched.truncate(MAX_SEARCH_RESULTS);
	matched
}

#[async_trait]
impl SearchServiceTrait for LoadSearchService {
	async fn search_loads(&self, request: &LoadSearchRequest) -> SearchResult<LoadSearchResponse> {
		let loads = self.storage.list_loads().await?;
		let board_size = loads.len();

		let matched: Vec<Load> = loads
			.into_iter()
			.filter(|load| matches_request(load, request))
			.collect();
		let total_matched = matched.len();

		debug!(
			"Load search matched {} of {} posted loads",
			total_matched, board_size
		);

		Ok(LoadSearchResponse::new(rank(matched), total_matched))
	}
}
