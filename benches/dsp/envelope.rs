//! Benchmarks for the amplitude state machine and its three decays.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kickz_dsp::dsp::envelope::{EnvelopeEngine, EnvelopeTimes};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let times = EnvelopeTimes {
        attack_ms: 50.0,
        release_ms: 1_000.0,
        pitch_decay_ms: 150.0,
        osc2_decay_ms: 100.0,
        click_decay_ms: 20.0,
    };

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut env = EnvelopeEngine::new();
        group.bench_with_input(BenchmarkId::new("hit", size), &size, |b, _| {
            b.iter(|| {
                env.trigger();
                for out in buffer.iter_mut() {
                    *out = env.next_sample(black_box(&times), SAMPLE_RATE).amplitude;
                }
            })
        });

        // Envelope parked in Off: the idle cost between hits
        let mut env = EnvelopeEngine::new();
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = env.next_sample(black_box(&times), SAMPLE_RATE).amplitude;
                }
            })
        });
    }

    group.finish();
}
