//! Pass/fail counts and timings for a single post-processed turn.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Telemetry map keys.
pub mod keys {
    pub const MEMORY_CHECKS: &str = "memory_checks";
    pub const MEMORY_FAILURES: &str = "memory_failures";
    pub const MATH_CHECKS: &str = "math_checks";
    pub const MATH_FAILURES: &str = "math_failures";
    pub const FAULTS: &str = "faults";
    pub const CORRECTIONS: &str = "corrections";
    pub const MEMORY_MICROS: &str = "memory_micros";
    pub const MATH_MICROS: &str = "math_micros";
    pub const TOTAL_MICROS: &str = "total_micros";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTelemetry {
    /// Memory claims examined.
    pub memory_checks: u64,
    /// Memory claims with no referent.
    pub memory_failures: u64,
    /// Math statements evaluated.
    pub math_checks: u64,
    pub math_failures: u64,
    /// Validators that panicked and were treated as inconclusive.
    pub faults: u64,
    pub corrections: u64,
    pub memory_micros: u64,
    pub math_micros: u64,
    pub total_micros: u64,
}

impl TurnTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_memory_time(&mut self, elapsed: Duration) {
        self.memory_micros = micros(elapsed);
    }

    pub fn record_math_time(&mut self, elapsed: Duration) {
        self.math_micros = micros(elapsed);
    }

    pub fn record_total_time(&mut self, elapsed: Duration) {
        self.total_micros = micros(elapsed);
    }

    /// Flatten into the string-keyed map carried by the response.
    pub fn to_map(&self) -> BTreeMap<String, u64> {
        [
            (keys::MEMORY_CHECKS, self.memory_checks),
            (keys::MEMORY_FAILURES, self.memory_failures),
            (keys::MATH_CHECKS, self.math_checks),
            (keys::MATH_FAILURES, self.math_failures),
            (keys::FAULTS, self.faults),
            (keys::CORRECTIONS, self.corrections),
            (keys::MEMORY_MICROS, self.memory_micros),
            (keys::MATH_MICROS, self.math_micros),
            (keys::TOTAL_MICROS, self.total_micros),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Rebuild from a response's telemetry map. Missing keys read as zero.
    pub fn from_map(map: &BTreeMap<String, u64>) -> Self {
        let get = |key: &str| map.get(key).copied().unwrap_or(0);
        Self {
            memory_checks: get(keys::MEMORY_CHECKS),
            memory_failures: get(keys::MEMORY_FAILURES),
            math_checks: get(keys::MATH_CHECKS),
            math_failures: get(keys::MATH_FAILURES),
            faults: get(keys::FAULTS),
            corrections: get(keys::CORRECTIONS),
            memory_micros: get(keys::MEMORY_MICROS),
            math_micros: get(keys::MATH_MICROS),
            total_micros: get(keys::TOTAL_MICROS),
        }
    }
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_has_every_key() {
        let map = TurnTelemetry::new().to_map();
        assert_eq!(map.len(), 9);
        assert!(map.values().all(|v| *v == 0));
    }

    #[test]
    fn map_round_trips() {
        let mut t = TurnTelemetry {
            memory_checks: 2,
            memory_failures: 1,
            corrections: 1,
            ..TurnTelemetry::default()
        };
        t.record_total_time(Duration::from_millis(3));
        assert_eq!(TurnTelemetry::from_map(&t.to_map()), t);
        assert_eq!(t.total_micros, 3_000);
    }
}
