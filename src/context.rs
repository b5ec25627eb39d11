//! Shared application state for the HTTP layer

use std::sync::Arc;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::metrics::WindowMetrics;
use crate::store::CounterStore;

/// Relay service context (shared by all handlers)
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub dispatcher: Arc<Dispatcher>,
    pub store: Arc<dyn CounterStore>,
    pub window: WindowMetrics,
}
