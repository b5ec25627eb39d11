// ============================================================================
// Retry Configuration
// ============================================================================

use std::time::Duration;

use crate::config::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_SECS};

/// Retry policy for push delivery attempts
///
/// The delay is fixed (no exponential backoff): the delivery pipeline makes
/// at most `max_attempts` calls with `retry_delay_secs` between them, then
/// gives up and reports failure to the caller.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Maximum delivery attempts per notification, including the first
    pub max_attempts: u32,

    /// Fixed delay between attempts, in seconds
    pub retry_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
        }
    }
}

impl RetryConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            max_attempts: std::env::var("PUSH_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ATTEMPTS),

            retry_delay_secs: std::env::var("PUSH_RETRY_DELAY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RETRY_DELAY_SECS),
        }
    }

    /// Delay between attempts as a `Duration`
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    /// Whether `attempt` (1-based) was the final allowed attempt
    pub const fn is_final_attempt(&self, attempt: u32) -> bool {
        attempt >= self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_config_defaults() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.retry_delay_secs, 10);
        assert_eq!(config.delay(), Duration::from_secs(10));
    }

    #[test]
    fn test_is_final_attempt() {
        let config = RetryConfig::default();

        assert!(!config.is_final_attempt(1));
        assert!(!config.is_final_attempt(2));
        assert!(config.is_final_attempt(3));
        assert!(config.is_final_attempt(4));
    }
}
