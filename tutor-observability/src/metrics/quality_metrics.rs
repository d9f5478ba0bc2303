//! Aggregate quality counters across all turns, lock-free.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TurnTelemetry;

/// Running totals shared by every turn of a middleware instance.
#[derive(Debug, Default)]
pub struct QualityMetrics {
    turns: AtomicU64,
    memory_checks: AtomicU64,
    memory_failures: AtomicU64,
    math_checks: AtomicU64,
    math_failures: AtomicU64,
    faults: AtomicU64,
    corrections: AtomicU64,
    profile_lookup_failures: AtomicU64,
    total_micros: AtomicU64,
}

/// Point-in-time view of [`QualityMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySnapshot {
    pub turns: u64,
    pub memory_checks: u64,
    pub memory_failures: u64,
    pub math_checks: u64,
    pub math_failures: u64,
    pub faults: u64,
    pub corrections: u64,
    pub profile_lookup_failures: u64,
    pub avg_turn_micros: u64,
    pub taken_at: DateTime<Utc>,
}

impl QualitySnapshot {
    /// Share of memory claims that had no referent (0.0 to 1.0).
    pub fn memory_failure_rate(&self) -> f64 {
        rate(self.memory_failures, self.memory_checks)
    }

    /// Share of evaluated math statements that were wrong (0.0 to 1.0).
    pub fn math_failure_rate(&self) -> f64 {
        rate(self.math_failures, self.math_checks)
    }
}

fn rate(failures: u64, checks: u64) -> f64 {
    if checks == 0 {
        return 0.0;
    }
    failures as f64 / checks as f64
}

impl QualityMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one turn's telemetry into the totals.
    pub fn record_turn(&self, turn: &TurnTelemetry) {
        self.turns.fetch_add(1, Ordering::Relaxed);
        self.memory_checks.fetch_add(turn.memory_checks, Ordering::Relaxed);
        self.memory_failures.fetch_add(turn.memory_failures, Ordering::Relaxed);
        self.math_checks.fetch_add(turn.math_checks, Ordering::Relaxed);
        self.math_failures.fetch_add(turn.math_failures, Ordering::Relaxed);
        self.faults.fetch_add(turn.faults, Ordering::Relaxed);
        self.corrections.fetch_add(turn.corrections, Ordering::Relaxed);
        self.total_micros.fetch_add(turn.total_micros, Ordering::Relaxed);
    }

    pub fn record_profile_lookup_failure(&self) {
        self.profile_lookup_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> QualitySnapshot {
        let turns = self.turns.load(Ordering::Relaxed);
        let total_micros = self.total_micros.load(Ordering::Relaxed);
        QualitySnapshot {
            turns,
            memory_checks: self.memory_checks.load(Ordering::Relaxed),
            memory_failures: self.memory_failures.load(Ordering::Relaxed),
            math_checks: self.math_checks.load(Ordering::Relaxed),
            math_failures: self.math_failures.load(Ordering::Relaxed),
            faults: self.faults.load(Ordering::Relaxed),
            corrections: self.corrections.load(Ordering::Relaxed),
            profile_lookup_failures: self.profile_lookup_failures.load(Ordering::Relaxed),
            avg_turn_micros: if turns == 0 { 0 } else { total_micros / turns },
            taken_at: Utc::now(),
        }
    }

    /// Reset all counters (useful for testing or periodic rotation).
    pub fn reset(&self) {
        for counter in [
            &self.turns,
            &self.memory_checks,
            &self.memory_failures,
            &self.math_checks,
            &self.math_failures,
            &self.faults,
            &self.corrections,
            &self.profile_lookup_failures,
            &self.total_micros,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
