// ============================================================================
// HTTP Routes
// ============================================================================
//
// - POST /api/v1/push/send            - dispatch one notification
// - GET  /api/v1/push/metrics/window  - current window counters (alerting)
// - GET  /health                      - liveness/readiness
// - GET  /metrics                     - Prometheus scrape endpoint
//
// ============================================================================

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::channel::{PushNotification, Recipient};
use crate::config::DEFAULT_PUSH_CHANNEL;
use crate::context::AppContext;
use crate::metrics::gather_metrics;

/// Build the relay service router
pub fn router(context: AppContext) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(health_check))
        .route("/health/live", get(health_check))
        .route("/metrics", get(process_metrics))
        .route("/api/v1/push/send", post(send_push))
        .route("/api/v1/push/metrics/window", get(window_metrics))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).into_inner())
        .with_state(context)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Prometheus scrape endpoint
async fn process_metrics() -> impl IntoResponse {
    match gather_metrics() {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to gather process metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to gather metrics"})),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SendPushRequest {
    pub device_token: String,

    /// Channel identifier; defaults to "fcm"
    pub channel: Option<String>,

    pub title: Option<String>,
    pub body: Option<String>,

    #[serde(default)]
    pub data: Value,
}

/// Dispatch one push notification through the retrier
///
/// Blocks until delivery succeeds or retries are exhausted (up to two
/// inter-attempt delays), so callers on a latency budget should treat this
/// as a worker endpoint, not a request-path one.
async fn send_push(
    State(context): State<AppContext>,
    Json(request): Json<SendPushRequest>,
) -> impl IntoResponse {
    let recipient = Recipient {
        device_token: request.device_token,
    };
    let notification = PushNotification {
        channel: request
            .channel
            .unwrap_or_else(|| DEFAULT_PUSH_CHANNEL.to_string()),
        title: request.title,
        body: request.body,
        data: request.data,
    };

    match context.dispatcher.dispatch(&recipient, &notification).await {
        Ok(delivered) => (StatusCode::OK, Json(json!({"success": delivered}))).into_response(),
        Err(e) => {
            error!(error = %e, "Dispatch failed on counter store");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Counter store unavailable"})),
            )
                .into_response()
        }
    }
}

/// Current window counters for the push channel
async fn window_metrics(State(context): State<AppContext>) -> impl IntoResponse {
    match context.window.snapshot(context.store.as_ref()).await {
        Ok(counts) => (
            StatusCode::OK,
            Json(json!({
                "channel": context.config.metrics.channel,
                "total": counts.total,
                "failed": counts.failed,
                "failure_rate": counts.failure_rate(),
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to read window counters");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Counter store unavailable"})),
            )
                .into_response()
        }
    }
}
