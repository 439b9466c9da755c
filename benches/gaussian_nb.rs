//! Benchmarks for Gaussian Naive Bayes fitting and prediction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lane_intent::prelude::*;

fn kinematic_data(size: usize) -> (Matrix<f64>, Vec<Label>) {
    let mut data = Vec::with_capacity(size * 4);
    let mut labels = Vec::with_capacity(size);
    for i in 0..size {
        let t = i as f64;
        let label = Label::ALL[i % Label::COUNT];
        let d_dot = label.index() as f64 - 1.0 + 0.05 * (t * 0.7).sin();
        data.extend_from_slice(&[t, 2.0 + (t * 0.3).sin(), 10.0 + (t * 0.1).cos(), d_dot]);
        labels.push(label);
    }
    (Matrix::from_vec(size, 4, data).unwrap(), labels)
}

fn bench_gaussian_nb_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_nb_fit");

    for size in [30, 300, 3000].iter() {
        let (x, y) = kinematic_data(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut model = GaussianNB::new();
                model.fit(black_box(&x), black_box(&y)).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_gaussian_nb_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_nb_predict");

    for size in [30, 300, 3000].iter() {
        let (x, y) = kinematic_data(*size);
        let mut model = GaussianNB::new();
        model.fit(&x, &y).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| model.predict_batch(black_box(&x)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gaussian_nb_fit, bench_gaussian_nb_predict);
criterion_main!(benches);
