//! Error taxonomy for the client pipeline.
//!
//! Every failure surfaced to a caller carries a displayable message; nothing
//! in this crate retries automatically. The only automatic recovery action
//! anywhere is token-cache invalidation on a failed bridge exchange.

use thiserror::Error;

/// Failures from the auth bridge, request pipeline, and chat session.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The bridge reported no active session (HTTP 401), or an operation
    /// requiring a user identity was attempted without one.
    #[error("No active session")]
    Unauthenticated,

    /// The token bridge failed for a reason other than a missing session.
    #[error("Failed to get auth token")]
    BridgeUnavailable,

    /// Non-success response from the task/chat backend. The message comes
    /// from the response's `detail` field when present, otherwise it is
    /// synthesized from the status code.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Local pre-flight rejection. Never sent over the wire.
    #[error("{0}")]
    Validation(String),

    /// The backend reported that the referenced conversation no longer
    /// exists. Recoverable: the session resets its conversation id and the
    /// next send starts a fresh conversation.
    #[error("Conversation not found. Starting a new chat.")]
    ConversationExpired,

    /// Network-level failure from the underlying transport.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Whether this error means the user should log in again.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Backend status code, if this is a backend rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}
