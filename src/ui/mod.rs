//! CLI presentation layer.

pub mod output;
