use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::config::FcmConfig;
use crate::utils::token_prefix;

use super::{PushChannel, PushNotification, Recipient};

/// FCM client wrapper over the HTTP v1 send endpoint
#[derive(Clone)]
pub struct FcmClient {
    http: reqwest::Client,
    config: FcmConfig,
}

impl FcmClient {
    /// Create new FCM client
    pub fn new(config: FcmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build FCM HTTP client")?;

        Ok(Self { http, config })
    }

    /// Check if FCM is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Build the HTTP v1 message body for one recipient
    fn build_message(recipient: &Recipient, notification: &PushNotification) -> Value {
        let mut message = json!({
            "token": recipient.device_token,
        });

        if notification.title.is_some() || notification.body.is_some() {
            message["notification"] = json!({
                "title": notification.title,
                "body": notification.body,
            });
        }

        if !notification.data.is_null() {
            message["data"] = notification.data.clone();
        }

        json!({ "message": message })
    }

    /// Send push notification to a device
    pub async fn send_notification(
        &self,
        recipient: &Recipient,
        notification: &PushNotification,
    ) -> Result<()> {
        if !self.config.enabled {
            debug!("FCM disabled - skipping notification send");
            return Ok(());
        }

        let token = &recipient.device_token;
        let body = Self::build_message(recipient, notification);

        debug!(
            token_prefix = %token_prefix(token),
            "Sending FCM notification"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .context("FCM request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                token_prefix = %token_prefix(token),
                "FCM rejected notification"
            );
            anyhow::bail!("FCM send failed with status {}: {}", status, error_body);
        }

        debug!("FCM notification sent successfully");
        Ok(())
    }
}

#[async_trait::async_trait]
impl PushChannel for FcmClient {
    async fn send(&self, recipient: &Recipient, notification: &PushNotification) -> Result<()> {
        self.send_notification(recipient, notification).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_message_with_notification() {
        let recipient = Recipient {
            device_token: "abc123".to_string(),
        };
        let notification = PushNotification {
            channel: "fcm".to_string(),
            title: Some("Order update".to_string()),
            body: Some("Your order has shipped".to_string()),
            data: json!({"order_id": "42"}),
        };

        let message = FcmClient::build_message(&recipient, &notification);

        assert_eq!(message["message"]["token"], "abc123");
        assert_eq!(message["message"]["notification"]["title"], "Order update");
        assert_eq!(message["message"]["data"]["order_id"], "42");
    }

    #[test]
    fn test_build_message_data_only() {
        let recipient = Recipient {
            device_token: "abc123".to_string(),
        };
        let notification = PushNotification {
            channel: "fcm".to_string(),
            title: None,
            body: None,
            data: Value::Null,
        };

        let message = FcmClient::build_message(&recipient, &notification);

        assert!(message["message"].get("notification").is_none());
        assert!(message["message"].get("data").is_none());
    }

    #[tokio::test]
    async fn test_disabled_client_reports_success() {
        let client = FcmClient::new(FcmConfig::disabled()).unwrap();
        let recipient = Recipient {
            device_token: "abc123".to_string(),
        };
        let notification = PushNotification {
            channel: "fcm".to_string(),
            title: None,
            body: None,
            data: Value::Null,
        };

        assert!(client.send(&recipient, &notification).await.is_ok());
    }
}
