use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{fm, noise::NoiseSource};

/*
Kick Oscillators
================

Two phase accumulators make the tone of the kick:

  body        A pure sine. Its pitch starts offset from the base pitch and
              glides back to it as the pitch envelope decays.

  secondary   A second oscillator with a selectable waveform, tuned as a
              ratio of the body pitch. Its phase also drives the FM path.

Phase runs from 0.0 to 1.0 and wraps, one wrap per cycle:

    phase += frequency / sample_rate

Waveforms are pure functions of phase, dispatched through a table indexed by
the waveform kind:

    sine       sin(2π·p)
    saw        2p − 1
    triangle   2(|2p − 1| − 0.5)
    pulse      +1 while p < width, −1 after
    noise      fresh uniform sample, phase ignored
*/

/// Waveforms available on the secondary oscillator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine = 0,
    Saw = 1,
    Triangle = 2,
    Pulse = 3,
    Noise = 4,
}

pub const WAVEFORM_COUNT: usize = 5;

type WaveFn = fn(phase: f32, pulse_width: f32, noise: &mut NoiseSource) -> f32;

const WAVE_TABLE: [WaveFn; WAVEFORM_COUNT] = [
    sine_wave,
    saw_wave,
    triangle_wave,
    pulse_wave,
    noise_wave,
];

fn sine_wave(phase: f32, _: f32, _: &mut NoiseSource) -> f32 {
    sine(phase)
}

fn saw_wave(phase: f32, _: f32, _: &mut NoiseSource) -> f32 {
    saw(phase)
}

fn triangle_wave(phase: f32, _: f32, _: &mut NoiseSource) -> f32 {
    triangle(phase)
}

fn pulse_wave(phase: f32, width: f32, _: &mut NoiseSource) -> f32 {
    pulse(phase, width)
}

fn noise_wave(_: f32, _: f32, noise: &mut NoiseSource) -> f32 {
    noise.next_bipolar()
}

impl Waveform {
    pub const ALL: [Waveform; WAVEFORM_COUNT] = [
        Waveform::Sine,
        Waveform::Saw,
        Waveform::Triangle,
        Waveform::Pulse,
        Waveform::Noise,
    ];

    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn render(self, phase: f32, pulse_width: f32, noise: &mut NoiseSource) -> f32 {
        WAVE_TABLE[self.index()](phase, pulse_width, noise)
    }
}

#[inline]
pub fn sine(phase: f32) -> f32 {
    (phase * TAU).sin()
}

#[inline]
pub fn saw(phase: f32) -> f32 {
    2.0 * phase - 1.0
}

#[inline]
pub fn triangle(phase: f32) -> f32 {
    let ramp = 2.0 * phase - 1.0;
    2.0 * (ramp.abs() - 0.5)
}

#[inline]
pub fn pulse(phase: f32, width: f32) -> f32 {
    if phase < width {
        1.0
    } else {
        -1.0
    }
}

/// Phase in `[0, 1)`, advanced once per sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseAccumulator {
    phase: f32,
}

impl PhaseAccumulator {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Advance by `frequency / sample_rate`. The step is always below one cycle.
    #[inline]
    pub fn advance(&mut self, frequency: f32, sample_rate: f32) {
        self.phase += frequency / sample_rate;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        } else if self.phase < 0.0 {
            // FM can push the body frequency below zero for a few samples
            self.phase += 1.0;
            if self.phase >= 1.0 {
                self.phase = 0.0;
            }
        }
        debug_assert!((0.0..1.0).contains(&self.phase));
    }

    pub fn value(&self) -> f32 {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

/// Everything the oscillator bank reads from the parameter store.
#[derive(Debug, Clone, Copy)]
pub struct OscillatorSettings {
    pub base_pitch: f32,
    pub pitch_curve: f32,
    pub body_level: f32,
    pub osc2_enabled: bool,
    pub waveform: Waveform,
    pub osc2_ratio: f32,
    pub osc2_level: f32,
    pub fm_amount: f32,
    pub fm_ratio: f32,
    pub pulse_width: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OscillatorOutput {
    pub body: f32,
    pub secondary: f32,
}

/// Body sine plus the secondary oscillator, coupled through FM.
#[derive(Debug, Clone, Default)]
pub struct OscillatorBank {
    body: PhaseAccumulator,
    secondary: PhaseAccumulator,
}

impl OscillatorBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_sample(
        &mut self,
        settings: &OscillatorSettings,
        pitch_env: f32,
        osc2_env: f32,
        noise: &mut NoiseSource,
        sample_rate: f32,
    ) -> OscillatorOutput {
        let body_freq = settings.base_pitch * (1.0 - pitch_env * settings.pitch_curve);
        let secondary_freq = body_freq * settings.osc2_ratio;

        // Modulator reads the secondary phase before this sample's advance
        let fm_offset = if settings.osc2_enabled && settings.fm_amount > 0.0 {
            fm::fm_offset(self.secondary.value(), settings.fm_amount, osc2_env)
        } else {
            0.0
        };

        self.body.advance(body_freq + fm_offset, sample_rate);
        self.secondary.advance(secondary_freq * settings.fm_ratio, sample_rate);

        let body = sine(self.body.value()) * settings.body_level;
        let secondary = if settings.osc2_enabled {
            settings
                .waveform
                .render(self.secondary.value(), settings.pulse_width, noise)
                * settings.osc2_level
                * osc2_env
        } else {
            0.0
        };

        OscillatorOutput { body, secondary }
    }

    pub fn body_phase(&self) -> f32 {
        self.body.value()
    }

    pub fn secondary_phase(&self) -> f32 {
        self.secondary.value()
    }

    pub fn reset(&mut self) {
        self.body.reset();
        self.secondary.reset();
    }
}
