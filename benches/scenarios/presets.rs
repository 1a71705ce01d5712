//! Benchmarks for rendering each factory preset.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kickz_dsp::{patch::PRESETS, KickSynth, OUTPUT_CHANNELS};

use crate::BLOCK_SIZES;

pub fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/presets");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size * OUTPUT_CHANNELS];

        for (index, preset) in PRESETS.iter().enumerate() {
            let mut synth = KickSynth::new();
            synth.load_preset(index as u8);

            group.bench_with_input(BenchmarkId::new(preset.name, size), &size, |b, &size| {
                b.iter(|| {
                    synth.note_on(36, 127);
                    synth.render(black_box(&mut buffer), size);
                })
            });
        }

        // Nothing sounding: cost of the idle path
        let mut synth = KickSynth::new();
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, &size| {
            b.iter(|| {
                synth.render(black_box(&mut buffer), size);
            })
        });
    }

    group.finish();
}
