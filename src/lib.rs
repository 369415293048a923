//! viewport-rs: interactive 2D viewport engine for very large ordered
//! time-series.
//!
//! The engine keeps an invertible affine mapping between data space and the
//! physical pixels of a drawing surface, and renders only what is visible:
//! binary search finds the visible samples and per-pixel-column max
//! aggregation bounds the emitted vertex count by the surface width, so frame
//! cost does not grow with the dataset.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{EngineConfig, ViewportEngine};
pub use error::{ViewportError, ViewportResult};
