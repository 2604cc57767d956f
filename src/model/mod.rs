//! Data model shared across the client.

pub mod types;
