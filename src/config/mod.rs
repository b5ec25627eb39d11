// ============================================================================
// push-relay Configuration
// ============================================================================
//
// Centralized configuration loaded from environment variables with sensible
// defaults. Each concern keeps its own sub-config with a from_env() loader.
//
// ============================================================================

pub mod constants;
mod fcm;
mod metrics;
mod retry;

pub use constants::{DEFAULT_PUSH_CHANNEL, SECONDS_PER_MINUTE};
pub use fcm::FcmConfig;
pub use metrics::MetricsWindowConfig;
pub use retry::RetryConfig;

use anyhow::{Context, Result};

use constants::DEFAULT_PORT;

/// Main configuration for the push-relay service
#[derive(Clone, Debug)]
pub struct Config {
    /// Redis connection URL for the shared counter store
    pub redis_url: String,

    pub port: u16,
    pub bind_address: String,
    pub rust_log: String,

    // Sub-configurations
    pub retry: RetryConfig,
    pub metrics: MetricsWindowConfig,
    pub fcm: FcmConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            redis_url: std::env::var("REDIS_URL").context("REDIS_URL is required")?,

            port,
            bind_address: format!("[::]:{}", port),

            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),

            retry: RetryConfig::from_env(),
            metrics: MetricsWindowConfig::from_env(),
            fcm: FcmConfig::from_env()?,
        })
    }
}
