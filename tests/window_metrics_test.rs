// ============================================================================
// Window Metrics Tests
// ============================================================================
//
// Covers the metrics counter contract against the in-memory store:
// - sent/failed increments and the channel filter
// - no lost updates under concurrent events
// - tumbling-window expiry: counts do not survive the window
//
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use push_relay::channel::{DeliveryOutcome, Outcome};
use push_relay::config::MetricsWindowConfig;
use push_relay::metrics::WindowMetrics;
use push_relay::store::{CounterStore, InMemoryCounterStore};

fn event(channel: &str, outcome: Outcome) -> DeliveryOutcome {
    DeliveryOutcome {
        channel: channel.to_string(),
        outcome,
    }
}

#[tokio::test]
async fn sent_event_increments_total_only() {
    let store = InMemoryCounterStore::new();
    let metrics = WindowMetrics::new(MetricsWindowConfig::default());

    metrics.record(&store, &event("fcm", Outcome::Sent)).await.unwrap();

    let counts = metrics.snapshot(&store).await.unwrap();
    assert_eq!(counts.total, 1);
    assert_eq!(counts.failed, 0);
}

#[tokio::test]
async fn failed_event_increments_both_counters() {
    let store = InMemoryCounterStore::new();
    let metrics = WindowMetrics::new(MetricsWindowConfig::default());

    metrics.record(&store, &event("fcm", Outcome::Failed)).await.unwrap();

    let counts = metrics.snapshot(&store).await.unwrap();
    assert_eq!(counts.total, 1);
    assert_eq!(counts.failed, 1);
}

#[tokio::test]
async fn non_push_channels_are_not_counted() {
    let store = InMemoryCounterStore::new();
    let metrics = WindowMetrics::new(MetricsWindowConfig::default());

    metrics.record(&store, &event("sms", Outcome::Failed)).await.unwrap();
    metrics.record(&store, &event("email", Outcome::Sent)).await.unwrap();

    let counts = metrics.snapshot(&store).await.unwrap();
    assert_eq!(counts.total, 0);
    assert_eq!(counts.failed, 0);
}

#[tokio::test]
async fn fcm_substring_channels_are_counted() {
    let store = InMemoryCounterStore::new();
    let metrics = WindowMetrics::new(MetricsWindowConfig::default());

    metrics
        .record(&store, &event("LegacyFCMChannel", Outcome::Sent))
        .await
        .unwrap();

    let counts = metrics.snapshot(&store).await.unwrap();
    assert_eq!(counts.total, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_events_lose_no_updates() {
    let store = Arc::new(InMemoryCounterStore::new());
    let metrics = Arc::new(WindowMetrics::new(MetricsWindowConfig::default()));

    let total_events = 200u32;
    let failed_events = 50u32;

    let mut handles = Vec::new();
    for i in 0..total_events {
        let store = store.clone();
        let metrics = metrics.clone();
        let outcome = if i < failed_events {
            Outcome::Failed
        } else {
            Outcome::Sent
        };
        handles.push(tokio::spawn(async move {
            metrics
                .record(store.as_ref(), &event("fcm", outcome))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let counts = metrics.snapshot(store.as_ref()).await.unwrap();
    assert_eq!(counts.total, total_events as i64);
    assert_eq!(counts.failed, failed_events as i64);
}

#[tokio::test(start_paused = true)]
async fn counts_do_not_survive_the_window() {
    let store = InMemoryCounterStore::new();
    let config = MetricsWindowConfig::default();
    let window_secs = config.window_secs;
    let metrics = WindowMetrics::new(config);

    metrics.record(&store, &event("fcm", Outcome::Failed)).await.unwrap();
    metrics.record(&store, &event("fcm", Outcome::Sent)).await.unwrap();

    let counts = metrics.snapshot(&store).await.unwrap();
    assert_eq!(counts.total, 2);
    assert_eq!(counts.failed, 1);

    // Let the 15-minute window lapse with no further events
    tokio::time::advance(Duration::from_secs(window_secs + 1)).await;

    let counts = metrics.snapshot(&store).await.unwrap();
    assert_eq!(counts.total, 0);
    assert_eq!(counts.failed, 0);

    // The next event starts a fresh window from zero
    metrics.record(&store, &event("fcm", Outcome::Sent)).await.unwrap();

    let counts = metrics.snapshot(&store).await.unwrap();
    assert_eq!(counts.total, 1);
    assert_eq!(counts.failed, 0);
}

#[tokio::test(start_paused = true)]
async fn window_expiration_is_not_extended_by_increments() {
    let store = InMemoryCounterStore::new();
    let config = MetricsWindowConfig::default();
    let window_secs = config.window_secs;
    let metrics = WindowMetrics::new(config);

    metrics.record(&store, &event("fcm", Outcome::Sent)).await.unwrap();

    // Keep recording through the window; the expiration set on first touch
    // must still fire
    tokio::time::advance(Duration::from_secs(window_secs - 10)).await;
    metrics.record(&store, &event("fcm", Outcome::Sent)).await.unwrap();
    assert_eq!(metrics.snapshot(&store).await.unwrap().total, 2);

    tokio::time::advance(Duration::from_secs(11)).await;
    assert_eq!(metrics.snapshot(&store).await.unwrap().total, 0);
}

#[tokio::test]
async fn init_if_absent_preserves_live_counters() {
    let store = InMemoryCounterStore::new();

    assert!(store.init_if_absent("push:metrics:fcm:total", 900).await.unwrap());
    store.incr("push:metrics:fcm:total").await.unwrap();

    assert!(!store.init_if_absent("push:metrics:fcm:total", 900).await.unwrap());
    assert_eq!(store.get("push:metrics:fcm:total").await.unwrap(), Some(1));
}
