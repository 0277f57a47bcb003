//! Criterion benchmarks for u-facility.
//!
//! Uses synthetic uniform instances on a 100 x 100 square to measure the
//! neighborhood, a single local search and the full multi-start solve.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_facility::instance::{Instance, Point};
use u_facility::local_search::{LocalSearchConfig, LocalSearchRunner};
use u_facility::multistart::{MultiStartConfig, MultiStartRunner};
use u_facility::neighborhood::neighbors;
use u_facility::seed::{cheapest_quartile, random_baseline};

fn synthetic(m: usize, s: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let point = |rng: &mut StdRng| {
        Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0))
    };
    let facilities: Vec<Point> = (0..m).map(|_| point(&mut rng)).collect();
    let opening: Vec<f64> = (0..m).map(|_| rng.random_range(50.0..300.0)).collect();
    let satellites: Vec<Point> = (0..s).map(|_| point(&mut rng)).collect();
    Instance::new(opening, facilities, satellites).expect("synthetic instance is well formed")
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");
    group.sample_size(20);

    for (m, s) in [(10usize, 50usize), (50, 200), (100, 500)] {
        let instance = synthetic(m, s, 42);
        let solution = cheapest_quartile(&instance);
        group.bench_with_input(
            BenchmarkId::new(format!("m{}_s{}", m, s), m),
            &(instance, solution),
            |b, (i, sol)| b.iter(|| black_box(neighbors(black_box(i), black_box(sol)))),
        );
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(10);

    for (m, s) in [(10usize, 50usize), (50, 200)] {
        let instance = synthetic(m, s, 7);
        let start = random_baseline(&instance, &mut StdRng::seed_from_u64(7));
        let start = u_facility::assignment::assign_nearest(&instance, start.open().to_vec());
        let config = LocalSearchConfig::default().with_max_iterations(40);
        group.bench_with_input(
            BenchmarkId::new(format!("m{}_s{}", m, s), m),
            &(instance, start, config),
            |b, (i, sol, cfg)| {
                b.iter(|| {
                    let result = LocalSearchRunner::run(black_box(i), sol.clone(), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_multistart(c: &mut Criterion) {
    let mut group = c.benchmark_group("multistart");
    group.sample_size(10);

    for &m in &[10usize, 25] {
        let instance = synthetic(m, m * 4, 3);
        let config = MultiStartConfig::default().with_random_restarts(10).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(m), &(instance, config), |b, (i, cfg)| {
            b.iter(|| {
                let result = MultiStartRunner::run(black_box(i), black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_neighbors, bench_local_search, bench_multistart);
criterion_main!(benches);
