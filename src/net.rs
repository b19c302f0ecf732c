//! src/net.rs
//!
//! Top-level `net` module exposing the meter HTTP client.

pub mod client;

/// Re-exports
pub use client::{ClientError, MeterClient, Reading};
