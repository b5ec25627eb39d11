// ============================================================================
// Configuration Constants
// ============================================================================
//
// Default values for all push-relay configuration knobs. Every value can be
// overridden through environment variables (see the sub-config modules).
//
// ============================================================================

/// Seconds per minute, for window arithmetic
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Default HTTP port for the relay service
pub const DEFAULT_PORT: u16 = 8080;

/// Default maximum delivery attempts per notification (including the first)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default fixed delay between delivery attempts, in seconds
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;

/// Default metrics window length: 15 minutes
pub const DEFAULT_WINDOW_SECS: u64 = 15 * SECONDS_PER_MINUTE;

/// Default Redis key prefix for window counters: "push:metrics:{channel}:{name}"
pub const DEFAULT_METRICS_KEY_PREFIX: &str = "push:metrics:";

/// Default push channel identifier tracked by the metrics window
pub const DEFAULT_PUSH_CHANNEL: &str = "fcm";

/// Default FCM HTTP v1 send endpoint template ({project_id} is substituted)
pub const DEFAULT_FCM_ENDPOINT: &str =
    "https://fcm.googleapis.com/v1/projects/{project_id}/messages:send";

/// Default timeout for a single FCM send request, in seconds
pub const DEFAULT_FCM_TIMEOUT_SECS: u64 = 20;
