use std::sync::Arc;
use std::thread;

use tutor_observability::metrics::keys;
use tutor_observability::tracing_setup::{events, spans};
use tutor_observability::{QualityMetrics, TurnTelemetry};

fn turn(memory_failures: u64, math_failures: u64, total_micros: u64) -> TurnTelemetry {
    TurnTelemetry {
        memory_checks: 2,
        memory_failures,
        math_checks: 4,
        math_failures,
        corrections: memory_failures + math_failures,
        total_micros,
        ..TurnTelemetry::default()
    }
}

#[test]
fn snapshot_aggregates_turns() {
    let metrics = QualityMetrics::new();
    metrics.record_turn(&turn(1, 0, 100));
    metrics.record_turn(&turn(0, 2, 300));

    let snap = metrics.snapshot();
    assert_eq!(snap.turns, 2);
    assert_eq!(snap.memory_checks, 4);
    assert_eq!(snap.corrections, 3);
    assert_eq!(snap.avg_turn_micros, 200);
    assert!((snap.memory_failure_rate() - 0.25).abs() < f64::EPSILON);
    assert!((snap.math_failure_rate() - 0.25).abs() < f64::EPSILON);
}

#[test]
fn empty_snapshot_has_zero_rates() {
    let snap = QualityMetrics::new().snapshot();
    assert_eq!(snap.turns, 0);
    assert_eq!(snap.avg_turn_micros, 0);
    assert_eq!(snap.memory_failure_rate(), 0.0);
}

#[test]
fn concurrent_recording_loses_nothing() {
    let metrics = Arc::new(QualityMetrics::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&metrics);
            thread::spawn(move || {
                for _ in 0..100 {
                    m.record_turn(&turn(1, 1, 10));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let snap = metrics.snapshot();
    assert_eq!(snap.turns, 800);
    assert_eq!(snap.memory_failures, 800);

    metrics.reset();
    assert_eq!(metrics.snapshot().turns, 0);
}

#[test]
fn snapshot_serializes() {
    let metrics = QualityMetrics::new();
    metrics.record_profile_lookup_failure();
    let json = serde_json::to_value(metrics.snapshot()).unwrap();
    assert_eq!(json["profile_lookup_failures"], 1);
    assert!(json["taken_at"].is_string());
}

#[test]
fn telemetry_map_uses_stable_keys() {
    let map = turn(1, 0, 5).to_map();
    assert_eq!(map[keys::MEMORY_FAILURES], 1);
    assert_eq!(map[keys::TOTAL_MICROS], 5);
}

#[test]
fn events_and_spans_work_without_subscriber() {
    let span = tutor_observability::pre_process_span!("u1");
    let _guard = span.enter();
    events::claim_rejected("u1", "we discussed", Some("algebra"));
    events::validator_fault("u1", "memory", "boom");
    assert_eq!(spans::names::PRE_PROCESS, "tutor.pre_process");
}
