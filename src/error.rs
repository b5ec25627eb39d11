//! Error types for the shared counter store seam.
//!
//! Store errors are never swallowed: the counter store is a hard dependency
//! of delivery metrics, so failures propagate to the dispatch caller.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by counter store implementations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}
