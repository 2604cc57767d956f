//! Chat session state: transcript, message lifecycle, conversation id.
//!
//! The transcript is an append-only log with optimistic user messages: the
//! user's entry is appended in `Sending` state before the network call is
//! issued, then marked `Sent` or `Error` by id once the call resolves.
//! Terminal statuses never transition further. State lives behind mutexes
//! (never held across an await) so two overlapping sends interleave
//! without corrupting each other.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tool_calls::{ToolCallTag, parse_tool_calls};
use crate::client::ApiClient;
use crate::error::ClientError;

/// Maximum message length accepted by the backend.
pub const MESSAGE_MAX_LENGTH: usize = 10_000;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Delivery state of a user message. Assistant messages are always `Sent`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Sending,
    Sent,
    Error,
}

/// One transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Stable id: `user-<millis>-<seq>` for user messages,
    /// `assistant-<message_id>` for assistant messages.
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub tool_calls: Vec<ToolCallTag>,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
}

/// `POST /api/{user_id}/chat` body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<i64>,
}

/// Chat endpoint response.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: i64,
    pub message_id: i64,
}

/// What `send_message` did with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Message was sent and the assistant replied.
    Sent,
    /// Input failed pre-flight validation; nothing was sent or recorded.
    Ignored,
}

/// Ordered transcript plus conversation bookkeeping for one chat.
#[derive(Debug)]
pub struct ChatSession {
    client: Arc<ApiClient>,
    user_id: Option<String>,
    transcript: Mutex<Vec<ChatMessage>>,
    conversation_id: Mutex<Option<i64>>,
    error: Mutex<Option<String>>,
    seq: AtomicU64,
}

impl ChatSession {
    /// New session. `user_id` comes from the active auth session; without
    /// one, sends are rejected.
    pub fn new(client: Arc<ApiClient>, user_id: Option<String>) -> Self {
        Self {
            client,
            user_id,
            transcript: Mutex::new(Vec::new()),
            conversation_id: Mutex::new(None),
            error: Mutex::new(None),
            seq: AtomicU64::new(0),
        }
    }

    /// Send a user message and append the assistant's reply.
    ///
    /// Empty (after trim) or oversized input is ignored without touching
    /// the transcript or the network. A missing user identity records and
    /// returns an authentication error. Otherwise the user message is
    /// appended optimistically before the request goes out.
    pub async fn send_message(&self, text: &str) -> Result<SendOutcome, ClientError> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MESSAGE_MAX_LENGTH {
            return Ok(SendOutcome::Ignored);
        }

        let Some(user_id) = self.user_id.as_deref() else {
            let err = ClientError::Unauthenticated;
            *self.error.lock() = Some("You must be logged in to send messages.".to_string());
            return Err(err);
        };

        // Optimistic insert: visible before the network call is issued.
        let user_msg_id = format!(
            "user-{}-{}",
            Utc::now().timestamp_millis(),
            self.seq.fetch_add(1, Ordering::Relaxed)
        );
        self.transcript.lock().push(ChatMessage {
            id: user_msg_id.clone(),
            role: ChatRole::User,
            content: trimmed.to_string(),
            tool_calls: Vec::new(),
            timestamp: Utc::now(),
            status: MessageStatus::Sending,
        });
        *self.error.lock() = None;

        let conversation_id = *self.conversation_id.lock();
        let body = ChatRequest {
            message: trimmed,
            conversation_id,
        };

        let result: Result<ChatResponse, ClientError> = self
            .client
            .post_json(&format!("/api/{user_id}/chat"), &body, "send message")
            .await;

        match result {
            Ok(response) => {
                self.mark(&user_msg_id, MessageStatus::Sent);
                *self.conversation_id.lock() = Some(response.conversation_id);

                debug!(
                    conversation_id = response.conversation_id,
                    message_id = response.message_id,
                    "chat exchange completed"
                );

                let tool_calls = parse_tool_calls(&response.response);
                self.transcript.lock().push(ChatMessage {
                    id: format!("assistant-{}", response.message_id),
                    role: ChatRole::Assistant,
                    content: response.response,
                    tool_calls,
                    timestamp: Utc::now(),
                    status: MessageStatus::Sent,
                });
                Ok(SendOutcome::Sent)
            }
            Err(err) => {
                self.mark(&user_msg_id, MessageStatus::Error);

                // The backend signals an evicted conversation only through
                // its detail text. Reset so the next send starts fresh.
                let err = if err.to_string().contains("Conversation not found") {
                    *self.conversation_id.lock() = None;
                    ClientError::ConversationExpired
                } else {
                    err
                };
                *self.error.lock() = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Update a message's status by id. `Sent` and `Error` are terminal.
    fn mark(&self, id: &str, status: MessageStatus) {
        let mut transcript = self.transcript.lock();
        if let Some(msg) = transcript.iter_mut().find(|m| m.id == id)
            && msg.status == MessageStatus::Sending
        {
            msg.status = status;
        }
    }

    /// Snapshot of the transcript in insertion order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.lock().clone()
    }

    /// Server-assigned conversation id, if one has been established.
    pub fn conversation_id(&self) -> Option<i64> {
        *self.conversation_id.lock()
    }

    /// Most recent user-facing error, if any.
    pub fn last_error(&self) -> Option<String> {
        self.error.lock().clone()
    }

    /// Forget the stored error without touching the transcript.
    pub fn dismiss_error(&self) {
        *self.error.lock() = None;
    }

    /// Start over: clears transcript, conversation id, and error state.
    pub fn reset(&self) {
        self.transcript.lock().clear();
        *self.conversation_id.lock() = None;
        *self.error.lock() = None;
    }
}
