//! Load search error types

use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by load search
///
/// Matching itself never fails: malformed or surprising filter text simply
/// matches nothing or everything. The only way a search can error is the
/// storage collaborator failing to produce the load snapshot.
#[derive(Debug, Error)]
pub enum SearchError {
	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),
}

pub type SearchResult<T> = Result<T, SearchError>;
