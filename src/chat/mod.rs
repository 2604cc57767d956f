//! Conversational assistant: session state and response tagging.

pub mod session;
pub mod tool_calls;

pub use session::{ChatMessage, ChatRole, ChatSession, MessageStatus, SendOutcome};
pub use tool_calls::{ToolCallTag, parse_tool_calls};
