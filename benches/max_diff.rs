mod common;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use algovault::extremal::{max_diff_brute_force, max_diff_optimized};
use common::random_ints;

fn bench_max_diff(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("max_diff");
    group.sample_size(10);

    for size in [10, 100, 1_000] {
        let items = random_ints(&mut rng, size, -1_000, 1_000);

        group.bench_with_input(BenchmarkId::new("brute_force", size), &items, |b, items| {
            b.iter(|| black_box(max_diff_brute_force(items)))
        });
        group.bench_with_input(BenchmarkId::new("optimized", size), &items, |b, items| {
            b.iter(|| black_box(max_diff_optimized(items)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_max_diff);
criterion_main!(benches);
