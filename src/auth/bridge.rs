//! Session-to-JWT token bridge client.
//!
//! The auth service issues opaque session tokens via cookies, but the
//! backend expects a signed JWT with a `sub` claim. A same-origin bridge
//! endpoint reads the session server-side and mints the JWT; this client
//! only fetches and caches the result. The signing key never reaches this
//! process.

use std::time::Instant;

use serde::Deserialize;
use tracing::{debug, warn};

use super::cache::TokenCache;
use crate::error::ClientError;

/// Bridge response on success (minimal fields).
#[derive(Debug, Deserialize)]
struct BridgeToken {
    token: String,
}

/// Client for the token bridge endpoint, with expiry-aware caching.
#[derive(Debug)]
pub struct TokenBridge {
    http: reqwest::Client,
    token_url: String,
    cache: TokenCache,
}

impl TokenBridge {
    pub fn new(http: reqwest::Client, token_url: impl Into<String>) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            cache: TokenCache::new(),
        }
    }

    /// Return a usable bearer token, fetching from the bridge on a cache
    /// miss. At most one bridge round trip per call.
    pub async fn bearer(&self) -> Result<String, ClientError> {
        if let Some(token) = self.cache.get() {
            return Ok(token);
        }
        self.fetch_token().await
    }

    /// Exchange the ambient session for a fresh JWT and cache it.
    ///
    /// Every failure path clears the cache so the next request
    /// re-authenticates instead of reusing a token implicated in a failure.
    pub async fn fetch_token(&self) -> Result<String, ClientError> {
        let res = match self.http.get(&self.token_url).send().await {
            Ok(res) => res,
            Err(e) => {
                self.cache.clear();
                warn!(error = %e, "token bridge unreachable");
                return Err(ClientError::BridgeUnavailable);
            }
        };

        let status = res.status();
        if !status.is_success() {
            self.cache.clear();
            if status == reqwest::StatusCode::UNAUTHORIZED {
                debug!("token bridge reported no active session");
                return Err(ClientError::Unauthenticated);
            }
            warn!(status = status.as_u16(), "token bridge request failed");
            return Err(ClientError::BridgeUnavailable);
        }

        let issued_at = Instant::now();
        let body: BridgeToken = match res.json().await {
            Ok(body) => body,
            Err(e) => {
                self.cache.clear();
                warn!(error = %e, "token bridge returned an unparseable body");
                return Err(ClientError::BridgeUnavailable);
            }
        };

        self.cache.set(&body.token, issued_at);
        debug!("token bridge exchange succeeded");
        Ok(body.token)
    }

    /// Drop any cached token. Call on logout.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    /// Whether a token is currently cached and inside its window.
    pub fn has_cached_token(&self) -> bool {
        self.cache.get().is_some()
    }
}
