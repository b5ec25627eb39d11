// ============================================================================
// Metrics
// ============================================================================
//
// Two layers of observability:
// - window: tumbling-window total/failed counters in the shared counter
//   store, read by external alerting
// - process: process-local Prometheus counters exposed on /metrics
//
// ============================================================================

pub mod process;
pub mod window;

pub use process::gather_metrics;
pub use window::{WindowCounts, WindowMetrics};
