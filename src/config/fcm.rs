// ============================================================================
// FCM Configuration
// ============================================================================

use anyhow::{Context, Result};

use crate::config::constants::{DEFAULT_FCM_ENDPOINT, DEFAULT_FCM_TIMEOUT_SECS};

/// FCM (Firebase Cloud Messaging) client configuration
#[derive(Clone, Debug)]
pub struct FcmConfig {
    /// Whether FCM sending is enabled (disabled clients report success
    /// without a network call, for local development)
    pub enabled: bool,

    /// Send endpoint template; "{project_id}" is substituted at load time
    pub endpoint: String,

    /// Firebase project ID
    pub project_id: String,

    /// Bearer token used to authorize send requests
    pub api_key: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl FcmConfig {
    pub(crate) fn from_env() -> Result<Self> {
        let enabled = std::env::var("FCM_ENABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let project_id = if enabled {
            std::env::var("FCM_PROJECT_ID").context("FCM_PROJECT_ID is required when FCM_ENABLED=true")?
        } else {
            std::env::var("FCM_PROJECT_ID").unwrap_or_default()
        };

        let api_key = if enabled {
            std::env::var("FCM_API_KEY").context("FCM_API_KEY is required when FCM_ENABLED=true")?
        } else {
            std::env::var("FCM_API_KEY").unwrap_or_default()
        };

        let endpoint = std::env::var("FCM_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_FCM_ENDPOINT.to_string())
            .replace("{project_id}", &project_id);

        Ok(Self {
            enabled,
            endpoint,
            project_id,
            api_key,
            timeout_secs: std::env::var("FCM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FCM_TIMEOUT_SECS),
        })
    }

    /// Disabled configuration for tests and Redis-less development
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            endpoint: String::new(),
            project_id: String::new(),
            api_key: String::new(),
            timeout_secs: DEFAULT_FCM_TIMEOUT_SECS,
        }
    }
}
