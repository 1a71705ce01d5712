//! Benchmarks for tanh drive.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kickz_dsp::dsp::distortion::drive_buffer;

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        for (label, amount) in [("bypass", 0.0), ("warm", 0.3), ("heavy", 1.0)] {
            let mut buffer = input.clone();
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    drive_buffer(black_box(&mut buffer), black_box(amount));
                })
            });
        }
    }

    group.finish();
}
