use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lloyd::Kmeans;
use rand::prelude::*;

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 16;
    let k = 10;

    let data: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f64>()).collect())
        .collect();

    group.bench_function("fit_n1000_d16_k10", |b| {
        b.iter(|| {
            let model = Kmeans::new(k).with_max_iter(10);
            let mut seed_rng = StdRng::seed_from_u64(42);
            model.fit(black_box(&data), Some(&mut seed_rng)).unwrap();
        })
    });

    group.bench_function("cluster_n1000_d16_k10", |b| {
        b.iter(|| {
            let mut seed_rng = StdRng::seed_from_u64(42);
            lloyd::cluster(black_box(&data), k, 1e-4, 10, Some(&mut seed_rng)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_kmeans);
criterion_main!(benches);
