// ============================================================================
// push-relay
// ============================================================================
//
// Push notification delivery reliability layer:
// - delivery: bounded retries with a fixed delay around an external push
//   channel (FCM)
// - metrics: tumbling-window total/failed counters in a shared counter
//   store, for external alerting
//
// ============================================================================

pub mod channel;
pub mod config;
pub mod context;
pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod store;
pub mod utils;
