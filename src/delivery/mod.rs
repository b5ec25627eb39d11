// ============================================================================
// Delivery
// ============================================================================
//
// Bounded-retry push delivery: masks transient channel failures behind a
// fixed number of attempts with a fixed delay between them.
//
// ============================================================================

pub mod retrier;

pub use retrier::DeliveryRetrier;
