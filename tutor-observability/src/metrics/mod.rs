//! Per-turn telemetry and the aggregate quality registry.

pub mod quality_metrics;
pub mod turn_telemetry;

pub use quality_metrics::{QualityMetrics, QualitySnapshot};
pub use turn_telemetry::{keys, TurnTelemetry};
