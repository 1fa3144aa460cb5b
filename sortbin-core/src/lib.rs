//! Core types and service wiring for the sortbin waste classifier.

/// Disposal guidance attached to each bin.
pub mod guidance;
/// Domain models for waste labels, bins, and classification results.
pub mod model;
/// Detector trait and the shared error type.
pub mod ports;
/// Rule table mapping labels to bins.
pub mod rules;
/// High-level service facade used by clients.
pub mod service;

pub use guidance::*;
pub use model::*;
pub use ports::*;
pub use rules::*;
pub use service::*;
