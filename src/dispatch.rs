// ============================================================================
// Dispatch Pipeline
// ============================================================================
//
// Ties the delivery retrier to the metrics window: run delivery, raise the
// outcome event, count it. Counter store failures propagate to the caller;
// delivery failures do not (the boolean result carries them).
//
// ============================================================================

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::channel::{DeliveryOutcome, Outcome, PushChannel, PushNotification, Recipient};
use crate::delivery::DeliveryRetrier;
use crate::metrics::process::{PUSH_NOTIFICATIONS_FAILED_TOTAL, PUSH_NOTIFICATIONS_SENT_TOTAL};
use crate::metrics::WindowMetrics;
use crate::store::CounterStore;

/// Per-notification dispatch pipeline: retrier, then metrics
pub struct Dispatcher {
    channel: Arc<dyn PushChannel>,
    store: Arc<dyn CounterStore>,
    retrier: DeliveryRetrier,
    window: WindowMetrics,
}

impl Dispatcher {
    pub fn new(
        channel: Arc<dyn PushChannel>,
        store: Arc<dyn CounterStore>,
        retrier: DeliveryRetrier,
        window: WindowMetrics,
    ) -> Self {
        Self {
            channel,
            store,
            retrier,
            window,
        }
    }

    /// Deliver one notification and record its outcome
    ///
    /// Returns the delivery result. Errors are only returned for counter
    /// store failures; delivery failures surface as `Ok(false)`.
    pub async fn dispatch(
        &self,
        recipient: &Recipient,
        notification: &PushNotification,
    ) -> Result<bool> {
        let delivered = self
            .retrier
            .deliver(self.channel.as_ref(), recipient, notification)
            .await;

        if delivered {
            PUSH_NOTIFICATIONS_SENT_TOTAL.inc();
        } else {
            PUSH_NOTIFICATIONS_FAILED_TOTAL.inc();
        }

        let event = DeliveryOutcome {
            channel: notification.channel.clone(),
            outcome: if delivered { Outcome::Sent } else { Outcome::Failed },
        };

        self.window
            .record(self.store.as_ref(), &event)
            .await
            .context("Failed to record delivery outcome in counter store")?;

        debug!(
            channel = %event.channel,
            delivered = delivered,
            "Dispatch complete"
        );

        Ok(delivered)
    }
}
