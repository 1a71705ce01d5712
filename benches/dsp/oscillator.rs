//! Benchmarks for the body/secondary oscillator bank.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kickz_dsp::dsp::{
    noise::NoiseSource,
    oscillator::{OscillatorBank, OscillatorSettings, Waveform},
};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

fn settings(waveform: Waveform, fm_amount: f32) -> OscillatorSettings {
    OscillatorSettings {
        base_pitch: 55.0,
        pitch_curve: 0.5,
        body_level: 0.9,
        osc2_enabled: true,
        waveform,
        osc2_ratio: 2.0,
        osc2_level: 0.5,
        fm_amount,
        fm_ratio: 2.7,
        pulse_width: 0.5,
    }
}

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (label, s) in [
            ("sine", settings(Waveform::Sine, 0.0)),
            ("pulse", settings(Waveform::Pulse, 0.0)),
            ("noise", settings(Waveform::Noise, 0.0)),
            ("fm", settings(Waveform::Sine, 0.7)),
        ] {
            let mut bank = OscillatorBank::new();
            let mut noise = NoiseSource::new();
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    for out in buffer.iter_mut() {
                        let o = bank.next_sample(black_box(&s), 0.5, 0.5, &mut noise, SAMPLE_RATE);
                        *out = o.body + o.secondary;
                    }
                })
            });
        }
    }

    group.finish();
}
