//! Redis-backed counter store with connection management

use redis::aio::ConnectionManager;
use redis::{cmd, AsyncCommands};

use crate::error::StoreResult;

use super::CounterStore;

/// Counter store backed by Redis with automatic reconnection
///
/// Initialize-if-absent maps to `SET key 0 NX EX ttl`, increments to `INCR`.
/// Window expiry is delegated entirely to Redis key TTLs.
#[derive(Clone)]
pub struct RedisCounterStore {
    conn: ConnectionManager,
}

impl RedisCounterStore {
    /// Connect to Redis server
    ///
    /// Supports both redis:// and rediss:// (TLS) URLs
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }

    /// Wrap an existing connection manager
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// TTL - remaining lifetime of a key in seconds
    pub async fn ttl(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.conn.clone();
        let ttl: i64 = conn.ttl(key).await?;
        Ok(ttl)
    }
}

#[async_trait::async_trait]
impl CounterStore for RedisCounterStore {
    async fn init_if_absent(&self, key: &str, ttl_secs: u64) -> StoreResult<bool> {
        let mut conn = self.conn.clone();

        // SET key 0 NX EX ttl: returns OK when created, Nil when the key exists
        let created: Option<String> = cmd("SET")
            .arg(key)
            .arg(0)
            .arg("NX")
            .arg("EX")
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await?;

        Ok(created.is_some())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = cmd("INCR").arg(key).query_async(&mut conn).await?;
        Ok(value)
    }

    async fn get(&self, key: &str) -> StoreResult<Option<i64>> {
        let mut conn = self.conn.clone();
        let value: Option<i64> = conn.get(key).await?;
        Ok(value)
    }
}
