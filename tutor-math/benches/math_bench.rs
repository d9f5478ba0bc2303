use criterion::{criterion_group, criterion_main, Criterion};

use tutor_math::MathEngine;

/// A long tutoring answer with a statement every few sentences.
fn build_answer() -> String {
    let mut text = String::new();
    for i in 0..200 {
        text.push_str(&format!(
            "Step {i}: multiply the terms, so {i} × 3 = {}. Then add (2 + {i}) * 2 = {}. ",
            i * 3,
            (2 + i) * 2 + (i % 7 == 0) as usize
        ));
    }
    text
}

fn bench_validate(c: &mut Criterion) {
    let engine = MathEngine::default();
    let answer = build_answer();
    c.bench_function("validate_and_annotate_200_statements", |b| {
        b.iter(|| engine.validate_and_annotate(&answer))
    });
}

fn bench_steps(c: &mut Criterion) {
    let engine = MathEngine::default();
    c.bench_function("solve_and_show_steps", |b| {
        b.iter(|| {
            engine
                .solve_and_show_steps("(12 + 8) / 4 * 3 - (6 - 2) + 7 * 2")
                .map(|steps| steps.count())
        })
    });
}

criterion_group!(benches, bench_validate, bench_steps);
criterion_main!(benches);
