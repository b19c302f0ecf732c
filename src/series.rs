//! src/series.rs
//!
//! Bounded multi-resolution flow series: view tags, per-resolution
//! buffers, and the store that fans readings out to all of them.

pub mod buffer;
pub mod resolution;
pub mod store;

/// Re-exports
pub use buffer::{Sample, SeriesBuffer};
pub use resolution::{InvalidResolution, Resolution};
pub use store::SeriesStore;
