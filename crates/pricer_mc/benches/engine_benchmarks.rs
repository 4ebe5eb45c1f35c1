//! Benchmarks for the Monte Carlo pricing engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_mc::mc::{DeltaEstimator, MonteCarloConfig, MonteCarloPricer, VarianceReduction};
use pricer_mc::model::GbmParams;
use pricer_mc::payoff::Payoff;

fn standard_params() -> GbmParams {
    GbmParams {
        spot: 100.0,
        rate: 0.05,
        volatility: 0.2,
        maturity: 1.0,
    }
}

fn pricer(n_draws: usize, variance_reduction: VarianceReduction) -> MonteCarloPricer {
    let config = MonteCarloConfig::builder()
        .n_draws(n_draws)
        .variance_reduction(variance_reduction)
        .seed(42)
        .build()
        .unwrap();
    MonteCarloPricer::new(config).unwrap()
}

fn benchmark_price_european(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_european");

    for n_draws in [10_000, 100_000] {
        let mut plain = pricer(n_draws, VarianceReduction::None);
        group.bench_with_input(BenchmarkId::new("plain", n_draws), &n_draws, |b, _| {
            b.iter(|| {
                plain
                    .price_european(black_box(standard_params()), Payoff::call(105.0))
                    .unwrap()
            })
        });

        let mut antithetic = pricer(n_draws, VarianceReduction::Antithetic);
        group.bench_with_input(BenchmarkId::new("antithetic", n_draws), &n_draws, |b, _| {
            b.iter(|| {
                antithetic
                    .price_european(black_box(standard_params()), Payoff::call(105.0))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_delta_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_estimators");
    let n_draws = 100_000;

    let mut engine = pricer(n_draws, VarianceReduction::None);

    group.bench_function("pathwise", |b| {
        b.iter(|| {
            engine
                .price_with_greeks(
                    black_box(standard_params()),
                    Payoff::call(105.0),
                    DeltaEstimator::Pathwise,
                )
                .unwrap()
        })
    });

    group.bench_function("finite_difference", |b| {
        b.iter(|| {
            engine
                .price_with_greeks(
                    black_box(standard_params()),
                    Payoff::call(105.0),
                    DeltaEstimator::FiniteDifference { bump: 1.0 },
                )
                .unwrap()
        })
    });

    group.finish();
}

fn benchmark_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_reduction");
    let n_draws = 1_000_000;

    let engine = pricer(n_draws, VarianceReduction::None);
    group.bench_function("parallel_1m", |b| {
        b.iter(|| {
            engine
                .price_european_parallel(black_box(standard_params()), Payoff::call(105.0))
                .unwrap()
        })
    });

    let mut sequential = pricer(n_draws, VarianceReduction::None);
    group.bench_function("sequential_1m", |b| {
        b.iter(|| {
            sequential
                .price_european(black_box(standard_params()), Payoff::call(105.0))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_price_european,
    benchmark_delta_estimators,
    benchmark_parallel
);
criterion_main!(benches);
