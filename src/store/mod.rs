// ============================================================================
// Counter Store
// ============================================================================
//
// Shared key-value counter store used by the metrics window. The trait
// allows for multiple implementations:
// - Redis (production, shared across relay instances)
// - In-memory (tests and Redis-less development)
//
// ============================================================================

pub mod memory;
pub mod redis;

pub use memory::InMemoryCounterStore;
pub use redis::RedisCounterStore;

use crate::error::StoreResult;

/// Shared counter store supporting expiring, atomically incremented counters
///
/// Increments must be atomic with respect to concurrent callers: the store
/// serializes them, so no read-modify-write pair appears anywhere in this
/// trait.
#[async_trait::async_trait]
pub trait CounterStore: Send + Sync {
    /// Create the counter at `key` with value 0 and the given expiration,
    /// only if it does not already exist. An existing counter and its TTL
    /// are left untouched.
    ///
    /// Returns `true` if the counter was created by this call.
    async fn init_if_absent(&self, key: &str, ttl_secs: u64) -> StoreResult<bool>;

    /// Atomically increment the counter at `key` by 1, returning the new value
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Read the counter at `key`, `None` if absent or expired
    async fn get(&self, key: &str) -> StoreResult<Option<i64>>;
}
