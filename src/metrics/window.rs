//! Tumbling-window delivery counters for the push channel
//!
//! Tracks delivery volume and failure volume over a fixed 15-minute window,
//! for external alerting. Counters live in the shared counter store so every
//! relay instance feeds the same window. Both counters are created together
//! on the first event of a window and expire together; the expiration is not
//! extended by later increments.

use serde::Serialize;
use tracing::debug;

use crate::channel::DeliveryOutcome;
use crate::config::MetricsWindowConfig;
use crate::error::StoreResult;
use crate::store::CounterStore;

const TOTAL_COUNTER: &str = "total";
const FAILED_COUNTER: &str = "failed";

/// Snapshot of the current window's counters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WindowCounts {
    pub total: i64,
    pub failed: i64,
}

impl WindowCounts {
    /// Failed fraction of deliveries in the window, 0.0 when the window is empty
    pub fn failure_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.failed as f64 / self.total as f64
        }
    }
}

/// Observer of delivery-outcome events, maintaining the window counters
#[derive(Clone, Debug)]
pub struct WindowMetrics {
    config: MetricsWindowConfig,
}

impl WindowMetrics {
    pub fn new(config: MetricsWindowConfig) -> Self {
        Self { config }
    }

    /// Whether an event for `channel` is counted by this window
    ///
    /// Exact match on the configured channel ("fcm") or a case-sensitive
    /// "FCM" substring; anything else is ignored.
    fn counts_channel(&self, channel: &str) -> bool {
        channel == self.config.channel || channel.contains("FCM")
    }

    fn counter_key(&self, channel: &str, counter: &str) -> String {
        format!("{}{}:{}", self.config.key_prefix, channel, counter)
    }

    /// Record one delivery-outcome event
    ///
    /// Ensures both counters exist for the current window, then atomically
    /// increments `total`, and `failed` as well when the outcome is a
    /// failure. Events for other channels are a no-op.
    pub async fn record<S: CounterStore + ?Sized>(
        &self,
        store: &S,
        event: &DeliveryOutcome,
    ) -> StoreResult<()> {
        if !self.counts_channel(&event.channel) {
            return Ok(());
        }

        let total_key = self.counter_key(&self.config.channel, TOTAL_COUNTER);
        let failed_key = self.counter_key(&self.config.channel, FAILED_COUNTER);

        // Both counters are initialized before either increment so they
        // share a single window expiration set on first touch.
        store.init_if_absent(&total_key, self.config.window_secs).await?;
        store.init_if_absent(&failed_key, self.config.window_secs).await?;

        let total = store.incr(&total_key).await?;
        if event.outcome.is_failure() {
            store.incr(&failed_key).await?;
        }

        debug!(
            channel = %event.channel,
            outcome = ?event.outcome,
            window_total = total,
            "Recorded delivery outcome"
        );

        Ok(())
    }

    /// Read the current window's counters; absent counters read as 0
    pub async fn snapshot<S: CounterStore + ?Sized>(&self, store: &S) -> StoreResult<WindowCounts> {
        let total_key = self.counter_key(&self.config.channel, TOTAL_COUNTER);
        let failed_key = self.counter_key(&self.config.channel, FAILED_COUNTER);

        Ok(WindowCounts {
            total: store.get(&total_key).await?.unwrap_or(0),
            failed: store.get(&failed_key).await?.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Outcome;
    use crate::store::InMemoryCounterStore;

    fn metrics() -> WindowMetrics {
        WindowMetrics::new(MetricsWindowConfig::default())
    }

    fn event(channel: &str, outcome: Outcome) -> DeliveryOutcome {
        DeliveryOutcome {
            channel: channel.to_string(),
            outcome,
        }
    }

    #[tokio::test]
    async fn test_channel_filter() {
        let metrics = metrics();

        assert!(metrics.counts_channel("fcm"));
        assert!(metrics.counts_channel("LegacyFCMChannel"));
        assert!(!metrics.counts_channel("sms"));
        assert!(!metrics.counts_channel("Fcm"));
        assert!(!metrics.counts_channel("email"));
    }

    #[tokio::test]
    async fn test_other_channels_are_ignored() {
        let store = InMemoryCounterStore::new();
        let metrics = metrics();

        metrics.record(&store, &event("sms", Outcome::Failed)).await.unwrap();

        let counts = metrics.snapshot(&store).await.unwrap();
        assert_eq!(counts.total, 0);
        assert_eq!(counts.failed, 0);
    }

    #[tokio::test]
    async fn test_failure_rate() {
        let empty = WindowCounts { total: 0, failed: 0 };
        assert_eq!(empty.failure_rate(), 0.0);

        let counts = WindowCounts { total: 4, failed: 1 };
        assert!((counts.failure_rate() - 0.25).abs() < f64::EPSILON);
    }
}
