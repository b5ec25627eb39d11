//! In-memory counter store for tests and Redis-less development
//!
//! Expiry is lazy: an expired entry is removed the next time any operation
//! touches its key. Uses `tokio::time::Instant` so tests running under a
//! paused clock can exercise window expiry deterministically.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::StoreResult;

use super::CounterStore;

#[derive(Debug)]
struct Entry {
    value: i64,
    /// None means no expiration (counter created by a bare increment)
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

/// Counter store held in process memory behind a single async mutex
///
/// The mutex serializes increments, giving the same lost-update-free
/// guarantee the Redis INCR command provides.
#[derive(Clone, Default)]
pub struct InMemoryCounterStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn init_if_absent(&self, key: &str, ttl_secs: u64) -> StoreResult<bool> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.get(key) {
            if !entry.is_expired(now) {
                return Ok(false);
            }
            entries.remove(key);
        }

        entries.insert(
            key.to_string(),
            Entry {
                value: 0,
                expires_at: Some(now + Duration::from_secs(ttl_secs)),
            },
        );
        Ok(true)
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired(now) => {
                entry.value += 1;
                Ok(entry.value)
            }
            _ => {
                // Absent or expired: recreate without expiration, as Redis
                // INCR does for a missing key
                entries.insert(
                    key.to_string(),
                    Entry {
                        value: 1,
                        expires_at: None,
                    },
                );
                Ok(1)
            }
        }
    }

    async fn get(&self, key: &str) -> StoreResult<Option<i64>> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Ok(Some(entry.value)),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_if_absent_does_not_clobber() {
        let store = InMemoryCounterStore::new();

        assert!(store.init_if_absent("c", 60).await.unwrap());
        store.incr("c").await.unwrap();
        store.incr("c").await.unwrap();

        // Second init is a no-op on a live counter
        assert!(!store.init_if_absent("c", 60).await.unwrap());
        assert_eq!(store.get("c").await.unwrap(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire() {
        let store = InMemoryCounterStore::new();

        store.init_if_absent("c", 60).await.unwrap();
        store.incr("c").await.unwrap();
        assert_eq!(store.get("c").await.unwrap(), Some(1));

        tokio::time::advance(Duration::from_secs(61)).await;

        assert_eq!(store.get("c").await.unwrap(), None);
        // A fresh init starts a new window at zero
        assert!(store.init_if_absent("c", 60).await.unwrap());
        assert_eq!(store.get("c").await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_incr_without_init_has_no_expiry() {
        let store = InMemoryCounterStore::new();

        assert_eq!(store.incr("bare").await.unwrap(), 1);
        assert_eq!(store.incr("bare").await.unwrap(), 2);
        assert_eq!(store.get("bare").await.unwrap(), Some(2));
    }
}
