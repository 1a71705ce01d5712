//! Benchmarks for the resonant ladder low-pass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kickz_dsp::dsp::filter::{FilterMode, LadderFilter};

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Sawtooth-like ramp
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        for (label, mode) in [("12db", FilterMode::TwoPole), ("24db", FilterMode::FourPole)] {
            let mut filter = LadderFilter::new();
            let mut buffer = input.clone();
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    filter.render(black_box(&mut buffer), black_box(0.7), black_box(0.8), mode);
                })
            });
        }

        // Coefficients recomputed every sample, as the voice does
        let mut filter = LadderFilter::new();
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("per_sample_coeffs", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = filter.process(
                        black_box(*sample),
                        black_box(0.7),
                        black_box(0.8),
                        FilterMode::FourPole,
                    );
                }
            })
        });
    }

    group.finish();
}
