//! Global limits and defaults for configuration and runtime

/// Maximum loads returned by a search, however many matched
pub const MAX_SEARCH_RESULTS: usize = 3;

/// Fraction of the posted rate at or above which an offer is accepted
pub const ACCEPT_RATIO: f64 = 0.95;

/// Fraction of the posted rate below which an offer is rejected
pub const WALK_AWAY_RATIO: f64 = 0.88;

/// Lower bound of the posted-rate window where 10x offer repair applies
pub const OFFER_REPAIR_MIN_BOARD_RATE: f64 = 800.0;

/// Upper bound of the posted-rate window where 10x offer repair applies
pub const OFFER_REPAIR_MAX_BOARD_RATE: f64 = 6_000.0;

/// Offers at or above this are candidates for 10x repair
pub const OFFER_REPAIR_THRESHOLD: f64 = 10_000.0;

/// A repaired offer must land within this fraction of the posted rate
pub const OFFER_REPAIR_TOLERANCE_RATIO: f64 = 0.5;

/// Longest MC number the federal registry issues
pub const MAX_MC_NUMBER_DIGITS: usize = 8;

/// Default timeout for carrier registry lookups in milliseconds
pub const DEFAULT_REGISTRY_TIMEOUT_MS: u64 = 5_000; // 5s
