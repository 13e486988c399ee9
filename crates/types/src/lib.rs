//! Haul Types
//!
//! Shared models and traits for the haul-broker carrier-sales backend.
//! This crate contains all domain models organized by business entity.

pub mod auth;
pub mod carriers;
pub mod constants;
pub mod loads;
pub mod models;
pub mod negotiations;
pub mod storage;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use loads::{Load, LoadSearchRequest, LoadSearchResponse, SearchError, SearchResult};

pub use negotiations::{
	NegotiationDecision, NegotiationError, NegotiationHistoryResponse, NegotiationNotes,
	NegotiationOutcome, NegotiationRecord, NegotiationRequest, NegotiationResult,
	NegotiationSummary,
};

pub use carriers::{
	normalize_mc_number, CarrierEligibility, CarrierRegistry, EligibilitySource, RegistryError,
	RegistryResult,
};

pub use auth::{
	AuthContext, AuthError, AuthRequest, AuthenticationResult, Authenticator, Permission,
};

pub use storage::{
	LoadStorageTrait, NegotiationStorageTrait, StorageError, StorageResult, StorageStats,
	StorageTrait,
};

pub use models::SecretString;
