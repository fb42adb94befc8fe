// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kfold_casteljau::{de_casteljau, horner, sum_k, vs, BernsteinPolynomial};

fn create_test_coefficients(degree: usize) -> Vec<f64> {
    (0..=degree)
        .map(|i| if i % 2 == 0 { i as f64 + 1.0 } else { -(i as f64) / 3.0 })
        .collect()
}

fn benchmark_basic_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_de_casteljau");

    for degree in [4, 16, 64, 256] {
        let coeffs = create_test_coefficients(degree);

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(de_casteljau::basic(black_box(0.3), &coeffs).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_compensated_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("compensated_de_casteljau");

    for degree in [4, 16, 64] {
        let coeffs = create_test_coefficients(degree);

        for order in [2, 3, 4, 6] {
            group.bench_function(format!("degree_{}_order_{}", degree, order), |b| {
                b.iter(|| {
                    black_box(de_casteljau::compensated(black_box(0.3), &coeffs, order).unwrap())
                })
            });
        }
    }

    group.finish();
}

fn benchmark_alternative_schemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternative_schemes");

    for degree in [16, 64] {
        let coeffs = create_test_coefficients(degree);

        group.bench_function(format!("vs_degree_{}", degree), |b| {
            b.iter(|| black_box(vs::vs(black_box(0.3), &coeffs).unwrap()))
        });

        group.bench_function(format!("horner_degree_{}", degree), |b| {
            b.iter(|| black_box(horner::basic(black_box(0.3), &coeffs).unwrap()))
        });

        group.bench_function(format!("horner_order_3_degree_{}", degree), |b| {
            b.iter(|| black_box(horner::compensated(black_box(0.3), &coeffs, 3).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression");

    let poly = BernsteinPolynomial::new(create_test_coefficients(16)).unwrap();
    for order in [2, 4, 8] {
        let expansion = poly.evaluate_compensated(0.3, order).unwrap();

        group.bench_function(format!("sum_k_order_{}", order), |b| {
            b.iter(|| black_box(sum_k(expansion.terms(), order).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_basic_evaluation,
    benchmark_compensated_evaluation,
    benchmark_alternative_schemes,
    benchmark_compression
);
criterion_main!(benches);
