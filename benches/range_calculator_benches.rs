use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rangeslide::{RangeCalculator, RangeConfig};
use std::hint::black_box;

struct Fixture {
    calculator: RangeCalculator,
    values: Vec<f64>,
}

impl Fixture {
    fn new() -> Self {
        let calculator = RangeCalculator::new(RangeConfig::new(-50.0, 50.0, 0.25).unwrap());

        let value_count = 4096;
        let mut rng = StdRng::seed_from_u64(0);
        let values = (0..value_count)
            .map(|_| rng.random_range(-100.0..100.0))
            .collect();

        Self { calculator, values }
    }
}

fn range_calculator_benchmarks(c: &mut Criterion) {
    c.benchmark_group("RangeCalculator");

    c.bench_function("normalize all", |b| {
        let fixture = Fixture::new();

        b.iter(|| fixture.calculator.normalize_all(black_box(&fixture.values)));
    });

    c.bench_function("round all", |b| {
        let fixture = Fixture::new();

        b.iter(|| fixture.calculator.round_all(black_box(&fixture.values)));
    });

    c.bench_function("format positions", |b| {
        let fixture = Fixture::new();

        b.iter(|| fixture.calculator.positions(black_box(&fixture.values)));
    });
}

criterion_group!(benches, range_calculator_benchmarks);

criterion_main!(benches);
