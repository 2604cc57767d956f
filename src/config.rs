//! Client configuration.
//!
//! Defaults target a local development stack (Next.js frontend on :3000
//! hosting the token bridge, FastAPI backend on :8000). Every field can be
//! overridden through the environment.

use std::time::Duration;

/// Configuration for the API client and token bridge.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the task/chat backend.
    pub api_base_url: String,
    /// URL of the session-to-JWT token bridge endpoint.
    pub bridge_url: String,
    /// Timeout applied to every HTTP request.
    pub http_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            bridge_url: "http://localhost:3000/api/auth/token".to_string(),
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Load config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(url) = dotenvy::var("TASKBRIDGE_API_URL") {
            cfg.api_base_url = url;
        }

        if let Ok(url) = dotenvy::var("TASKBRIDGE_BRIDGE_URL") {
            cfg.bridge_url = url;
        }

        if let Ok(val) = dotenvy::var("TASKBRIDGE_HTTP_TIMEOUT_MS")
            && let Ok(ms) = val.parse::<u64>()
        {
            cfg.http_timeout = Duration::from_millis(ms);
        }

        cfg
    }
}
