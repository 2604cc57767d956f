//! Authenticated request pipeline for the task backend.
//!
//! Every outbound call goes through [`ApiClient`]: obtain a bearer token
//! (cached or freshly bridged), attach it, send JSON, and normalize the
//! outcome. Non-success responses are turned into typed errors carrying the
//! backend's `detail` message when it supplies one. Nothing here retries;
//! failures propagate to the caller for user-visible reporting.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::TokenBridge;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::tasks::TasksApi;

/// HTTP client for the task/chat backend.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bridge: TokenBridge,
}

impl ApiClient {
    /// Build a client from config. One underlying connection pool is shared
    /// between backend calls and bridge fetches.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        let bridge = TokenBridge::new(http.clone(), config.bridge_url.clone());
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            bridge,
        })
    }

    /// Assemble a client from already-built parts (tests point the bridge
    /// and backend at mock servers).
    pub fn from_parts(http: reqwest::Client, base_url: impl Into<String>, bridge: TokenBridge) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bridge,
        }
    }

    /// The token bridge backing this client.
    pub fn bridge(&self) -> &TokenBridge {
        &self.bridge
    }

    /// Task operations facade.
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, op: &str) -> Result<T, ClientError> {
        let res = self.execute(Method::GET, path, None::<&()>, op).await?;
        Ok(res.json().await?)
    }

    /// POST a JSON body, returning the parsed response.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B, op: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.execute(Method::POST, path, Some(body), op).await?;
        Ok(res.json().await?)
    }

    /// PUT a JSON body, returning the parsed response.
    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B, op: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.execute(Method::PUT, path, Some(body), op).await?;
        Ok(res.json().await?)
    }

    /// DELETE a resource (no-content response).
    pub(crate) async fn delete(&self, path: &str, op: &str) -> Result<(), ClientError> {
        self.execute(Method::DELETE, path, None::<&()>, op).await?;
        Ok(())
    }

    /// Shared pipeline: token, request, status normalization.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        op: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.bridge.bearer().await?;
        let url = format!("{}{}", self.base_url, path);

        let mut req = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&token);
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await?;
        let status = res.status();
        debug!(method = %method, path, status = status.as_u16(), "backend request");

        if status.is_success() {
            return Ok(res);
        }

        // Extract a human-readable message from the backend's error body
        // ({"detail": "..."}) when present, else synthesize one.
        let message = match res.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("detail")
                .and_then(|d| d.as_str())
                .map(std::borrow::ToOwned::to_owned),
            Err(_) => None,
        };
        Err(ClientError::Backend {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| format!("{op} failed: {status}", status = status.as_u16())),
        })
    }
}
