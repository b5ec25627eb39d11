// ============================================================================
// Metrics Window Configuration
// ============================================================================

use crate::config::constants::{
    DEFAULT_METRICS_KEY_PREFIX, DEFAULT_PUSH_CHANNEL, DEFAULT_WINDOW_SECS,
};

/// Configuration for the tumbling-window delivery counters
///
/// Counter keys follow the format "{key_prefix}{channel}:{counter}", e.g.
/// "push:metrics:fcm:total". Both counters for a channel share one window
/// expiration, set when the first event of the window arrives.
#[derive(Clone, Debug)]
pub struct MetricsWindowConfig {
    /// Window length in seconds (counters expire this long after first touch)
    pub window_secs: u64,

    /// Key prefix for window counters
    pub key_prefix: String,

    /// Push channel identifier tracked by the window ("fcm")
    pub channel: String,
}

impl Default for MetricsWindowConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
            key_prefix: DEFAULT_METRICS_KEY_PREFIX.to_string(),
            channel: DEFAULT_PUSH_CHANNEL.to_string(),
        }
    }
}

impl MetricsWindowConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            window_secs: std::env::var("METRICS_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_WINDOW_SECS),

            key_prefix: std::env::var("METRICS_KEY_PREFIX")
                .unwrap_or_else(|_| DEFAULT_METRICS_KEY_PREFIX.to_string()),

            channel: std::env::var("PUSH_CHANNEL")
                .unwrap_or_else(|_| DEFAULT_PUSH_CHANNEL.to_string()),
        }
    }
}
