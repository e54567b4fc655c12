use cleave::cluster::{DistanceMatrix, Divisive};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn blobs(n: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let centers = [[0.0f32, 0.0], [50.0, 10.0], [20.0, 60.0]];
    (0..n)
        .map(|i| {
            let c = centers[i % centers.len()];
            vec![
                c[0] + rng.random::<f32>() * 10.0,
                c[1] + rng.random::<f32>() * 10.0,
            ]
        })
        .collect()
}

fn bench_divisive(c: &mut Criterion) {
    let mut group = c.benchmark_group("divisive");
    let data = blobs(500, 42);

    group.bench_function("distance_matrix_n500", |b| {
        b.iter(|| DistanceMatrix::build(black_box(&data)).unwrap())
    });

    group.bench_function("fit_n500_k3", |b| {
        b.iter(|| {
            let model = Divisive::new().with_n_clusters(3);
            model.fit(black_box(&data)).unwrap();
        })
    });

    group.bench_function("fit_n500_k20", |b| {
        b.iter(|| {
            let model = Divisive::new().with_n_clusters(20);
            model.fit(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_divisive);
criterion_main!(benches);
