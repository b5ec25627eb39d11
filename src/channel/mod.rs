// ============================================================================
// Push Channels
// ============================================================================
//
// External push delivery mechanisms behind the PushChannel trait.
// Current implementation: FCM over the HTTP v1 API.
//
// ============================================================================

pub mod fcm;
mod types;

pub use fcm::FcmClient;
pub use types::{DeliveryOutcome, Outcome, PushNotification, Recipient};

use anyhow::Result;

/// External push delivery mechanism
///
/// Implementations return `Ok(())` when the channel accepted the
/// notification and an error for any delivery failure. The delivery
/// pipeline treats all channel errors as retryable.
#[async_trait::async_trait]
pub trait PushChannel: Send + Sync {
    /// Attempt to deliver one notification to one recipient
    async fn send(&self, recipient: &Recipient, notification: &PushNotification) -> Result<()>;
}
