use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A push notification to deliver: channel identifier plus an opaque payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushNotification {
    /// Channel identifier, e.g. "fcm"
    pub channel: String,

    /// Visible notification title (None for data-only pushes)
    pub title: Option<String>,

    /// Visible notification body
    pub body: Option<String>,

    /// Opaque data payload forwarded to the client as-is
    #[serde(default)]
    pub data: Value,
}

/// Recipient of a push notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    /// Device token registered with the push channel
    pub device_token: String,
}

/// Final outcome of a delivery (after all retry attempts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Sent,
    Failed,
}

impl Outcome {
    pub const fn is_failure(self) -> bool {
        matches!(self, Outcome::Failed)
    }
}

/// Delivery-outcome event consumed by the metrics window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    /// Channel identifier of the delivery mechanism used
    pub channel: String,

    /// Whether the delivery ultimately succeeded
    pub outcome: Outcome,
}
