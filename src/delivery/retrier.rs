use tracing::{debug, error, warn};

use crate::channel::{PushChannel, PushNotification, Recipient};
use crate::config::RetryConfig;
use crate::metrics::process::PUSH_DELIVERY_ATTEMPTS_TOTAL;
use crate::utils::token_prefix;

/// Ephemeral bookkeeping for one delivery invocation
///
/// Created at dispatch, discarded once the final result is reported. Never
/// shared across invocations.
#[derive(Debug)]
struct DeliveryAttempt<'a> {
    device_token: &'a str,
    channel: &'a str,
    attempts: u32,
    last_error: Option<String>,
}

impl<'a> DeliveryAttempt<'a> {
    fn new(recipient: &'a Recipient, channel: &'a str) -> Self {
        Self {
            device_token: &recipient.device_token,
            channel,
            attempts: 0,
            last_error: None,
        }
    }

    fn record_failure(&mut self, error: String) {
        self.attempts += 1;
        self.last_error = Some(error);
    }
}

/// Delivers one notification to one recipient, retrying on failure
///
/// All channel errors are treated as transient and retried uniformly. The
/// retrier never returns an error itself: individual attempt failures are
/// absorbed and logged, and the caller gets a plain success/failure signal.
/// The inter-attempt delay suspends the calling task; callers that must not
/// block a request path run delivery on a worker task.
#[derive(Clone, Debug)]
pub struct DeliveryRetrier {
    config: RetryConfig,
}

impl DeliveryRetrier {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Attempt delivery through `channel`, up to the configured number of
    /// attempts with a fixed delay between them.
    ///
    /// Returns `true` as soon as one attempt succeeds, `false` once all
    /// attempts are exhausted. No delay is incurred after the final attempt.
    pub async fn deliver<C: PushChannel + ?Sized>(
        &self,
        channel: &C,
        recipient: &Recipient,
        notification: &PushNotification,
    ) -> bool {
        let mut attempt = DeliveryAttempt::new(recipient, &notification.channel);
        let token = attempt.device_token;

        loop {
            PUSH_DELIVERY_ATTEMPTS_TOTAL.inc();

            match channel.send(recipient, notification).await {
                Ok(()) => {
                    debug!(
                        channel = %attempt.channel,
                        token_prefix = %token_prefix(token),
                        attempt = attempt.attempts + 1,
                        "Push notification delivered"
                    );
                    return true;
                }
                Err(e) => {
                    attempt.record_failure(e.to_string());

                    warn!(
                        channel = %attempt.channel,
                        token_prefix = %token_prefix(token),
                        attempt = attempt.attempts,
                        max_attempts = self.config.max_attempts,
                        error = %e,
                        "Push delivery attempt failed"
                    );

                    if self.config.is_final_attempt(attempt.attempts) {
                        error!(
                            channel = %attempt.channel,
                            token_prefix = %token_prefix(token),
                            attempts = attempt.attempts,
                            error = %attempt.last_error.as_deref().unwrap_or("unknown"),
                            "Push delivery failed after all retry attempts"
                        );
                        return false;
                    }

                    tokio::time::sleep(self.config.delay()).await;
                }
            }
        }
    }
}
