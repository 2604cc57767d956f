//! Authentication: token cache and session-to-JWT bridge client.

pub mod bridge;
pub mod cache;

pub use bridge::TokenBridge;
pub use cache::TokenCache;
