// ============================================================================
// push-relay service
// ============================================================================
//
// Worker service wrapping the delivery retrier and window metrics behind a
// small HTTP surface (send, window counters, health, Prometheus scrape).
//
// ============================================================================

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use push_relay::channel::FcmClient;
use push_relay::config::Config;
use push_relay::context::AppContext;
use push_relay::delivery::DeliveryRetrier;
use push_relay::dispatch::Dispatcher;
use push_relay::metrics::WindowMetrics;
use push_relay::routes;
use push_relay::store::RedisCounterStore;

/// Mask credentials in a Redis URL for logging
fn mask_redis_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        let protocol_end = url.find("://").map(|p| p + 3).unwrap_or(0);
        format!("{}***{}", &url[..protocol_end], &url[at_pos..])
    } else {
        url.to_string()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    let config = Arc::new(config);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("=== Push Relay Starting ===");
    info!("Port: {}", config.port);
    info!(
        "Retry policy: {} attempts, {}s delay",
        config.retry.max_attempts, config.retry.retry_delay_secs
    );
    info!(
        "Metrics window: {}s for channel '{}'",
        config.metrics.window_secs, config.metrics.channel
    );

    // Connect to Redis (shared counter store)
    info!("Connecting to Redis at: {}", mask_redis_url(&config.redis_url));
    let store = Arc::new(
        RedisCounterStore::connect(&config.redis_url)
            .await
            .context("Failed to connect to Redis counter store")?,
    );
    info!("Connected to Redis");

    // Initialize FCM client
    let fcm_client =
        Arc::new(FcmClient::new(config.fcm.clone()).context("Failed to initialize FCM client")?);
    if fcm_client.is_enabled() {
        info!("FCM client initialized (project: {})", config.fcm.project_id);
    } else {
        info!("FCM is disabled - sends will be logged and reported successful");
    }

    // Wire the dispatch pipeline
    let retrier = DeliveryRetrier::new(config.retry.clone());
    let window = WindowMetrics::new(config.metrics.clone());
    let dispatcher = Arc::new(Dispatcher::new(
        fcm_client,
        store.clone(),
        retrier,
        window.clone(),
    ));

    let context = AppContext {
        config: config.clone(),
        dispatcher,
        store,
        window,
    };

    let app = routes::router(context);

    info!("Listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .context("Failed to bind HTTP listener")?;

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
