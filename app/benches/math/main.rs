/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use bitlog2::{
    Algorithm, DeBruijn, HashPattern, SPREAD_MAGIC, ilog2_debruijn_isolate, ilog2_debruijn_spread,
    ilog2_exponent, ilog2_exponent_or1, ilog2_float_log, ilog2_lzcnt, ilog2_poly_log, ilog2_ref,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 12345;
const DATA_COUNT: usize = 1000;

fn input_values() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..DATA_COUNT).map(|_| rng.random_range(1..=u64::MAX)).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let values = input_values();

    c.bench_function("bitlog2: lzcnt", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &x in values.iter() {
                sum += ilog2_lzcnt(black_box(x));
            }
            black_box(sum)
        })
    });

    c.bench_function("core: u64::ilog2", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for &x in values.iter() {
                sum += black_box(x).ilog2();
            }
            black_box(sum)
        })
    });

    c.bench_function("bitlog2: exponent", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &x in values.iter() {
                sum += ilog2_exponent(black_box(x));
            }
            black_box(sum)
        })
    });

    c.bench_function("bitlog2: exponent_or1", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &x in values.iter() {
                sum += ilog2_exponent_or1(black_box(x));
            }
            black_box(sum)
        })
    });

    c.bench_function("bitlog2: debruijn_spread", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for &x in values.iter() {
                sum += ilog2_debruijn_spread(black_box(x));
            }
            black_box(sum)
        })
    });

    c.bench_function("bitlog2: debruijn_isolate", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for &x in values.iter() {
                sum += ilog2_debruijn_isolate(black_box(x));
            }
            black_box(sum)
        })
    });

    let rebuilt = DeBruijn::new(SPREAD_MAGIC, HashPattern::Spread);
    c.bench_function("bitlog2: DeBruijn::ilog2", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for &x in values.iter() {
                sum += rebuilt.ilog2(black_box(x));
            }
            black_box(sum)
        })
    });

    c.bench_function("system: log2", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &x in values.iter() {
                sum += ilog2_float_log(black_box(x));
            }
            black_box(sum)
        })
    });

    c.bench_function("libm::log2", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &x in values.iter() {
                sum += libm::log2(black_box(x) as f64) as i64;
            }
            black_box(sum)
        })
    });

    c.bench_function("bitlog2: FMA poly_log", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &x in values.iter() {
                sum += ilog2_poly_log(black_box(x));
            }
            black_box(sum)
        })
    });

    c.bench_function("bitlog2: reference", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &x in values.iter() {
                sum += ilog2_ref(black_box(x));
            }
            black_box(sum)
        })
    });

    c.bench_function("bitlog2: Algorithm::eval dispatch", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for algorithm in Algorithm::ALL {
                for &x in values.iter() {
                    sum = sum.wrapping_add(algorithm.eval(black_box(x)));
                }
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
