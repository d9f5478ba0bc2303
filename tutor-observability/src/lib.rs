//! # tutor-observability
//!
//! Structured tracing with span definitions and named events, per-turn
//! telemetry maps, and lock-free aggregate quality metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{QualityMetrics, QualitySnapshot, TurnTelemetry};
