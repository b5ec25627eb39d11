//! Prometheus metrics for the push-relay process
//!
//! Process-local counters exposed on /metrics for scraping:
//! - Delivery attempts (every channel call, including retries)
//! - Final delivery successes and failures

use anyhow::Result;
use once_cell::sync::Lazy;
use prometheus::{opts, register_int_counter, Encoder, IntCounter, TextEncoder};

/// Total channel send attempts, including retries
pub static PUSH_DELIVERY_ATTEMPTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "push_relay_delivery_attempts_total",
        "Total push channel send attempts, including retries"
    ))
    .expect("Failed to register PUSH_DELIVERY_ATTEMPTS_TOTAL metric")
});

/// Notifications delivered successfully (after any retries)
pub static PUSH_NOTIFICATIONS_SENT_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "push_relay_notifications_sent_total",
        "Total push notifications delivered successfully"
    ))
    .expect("Failed to register PUSH_NOTIFICATIONS_SENT_TOTAL metric")
});

/// Notifications that failed after exhausting all retry attempts
pub static PUSH_NOTIFICATIONS_FAILED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "push_relay_notifications_failed_total",
        "Total push notifications that failed after all retry attempts"
    ))
    .expect("Failed to register PUSH_NOTIFICATIONS_FAILED_TOTAL metric")
});

/// Gather all registered metrics and encode as Prometheus text format
pub fn gather_metrics() -> Result<String> {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_metrics() {
        // Increment a counter to ensure metrics are registered
        PUSH_NOTIFICATIONS_SENT_TOTAL.inc();

        let result = gather_metrics();
        assert!(result.is_ok());

        let metrics_text = result.unwrap();
        assert!(metrics_text.contains("push_relay_notifications_sent_total"));
    }
}
