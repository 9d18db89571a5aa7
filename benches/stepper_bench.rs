//! Stepper benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skipcycle::{skip_cycle, CyclicStepper};

fn benchmark_advance(c: &mut Criterion) {
    let sequence: Vec<u64> = (0..1024).collect();

    c.bench_function("advance_x1000", |b| {
        let mut stepper = CyclicStepper::new(sequence.clone(), 7).unwrap();
        b.iter(|| {
            for _ in 0..1000 {
                black_box(stepper.advance());
            }
        });
    });

    c.bench_function("skip_cycle_take_1000", |b| {
        b.iter(|| {
            let sum: u64 = skip_cycle(sequence.clone(), 7)
                .unwrap()
                .take(1000)
                .map(|tick| tick.value)
                .sum();
            black_box(sum);
        });
    });
}

criterion_group!(benches, benchmark_advance);
criterion_main!(benches);
