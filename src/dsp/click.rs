//! Attack click.
//!
//! A short burst at the start of each hit: noise blended with a sine at the
//! click frequency, sharpened by a one-pole differencer and shaped by the
//! click envelope.

use crate::dsp::{noise::NoiseSource, oscillator::sine, oscillator::PhaseAccumulator};

/// Share of the previous blended sample subtracted by the differencer.
const HIGH_PASS_COEFF: f32 = 0.7;
/// Output gain applied after the envelope.
const CLICK_GAIN: f32 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct ClickSettings {
    pub frequency: f32,
    pub level: f32,
    /// 0.0 is pure noise, 1.0 is pure tone.
    pub tone: f32,
}

#[derive(Debug, Clone, Default)]
pub struct ClickGenerator {
    phase: PhaseAccumulator,
    last: f32,
}

impl ClickGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `gate` is true while the amplitude envelope is sounding. The tone
    /// phase runs every sample whether or not the click is audible.
    pub fn next_sample(
        &mut self,
        gate: bool,
        settings: &ClickSettings,
        envelope: f32,
        noise: &mut NoiseSource,
        sample_rate: f32,
    ) -> f32 {
        self.phase.advance(settings.frequency, sample_rate);

        if !gate || envelope <= 0.0 {
            return 0.0;
        }

        let noisy = noise.next_bipolar();
        let tonal = sine(self.phase.value());
        let source = noisy * (1.0 - settings.tone) + tonal * settings.tone;

        let high_passed = source - self.last * HIGH_PASS_COEFF;
        self.last = source;

        high_passed * settings.level * envelope * CLICK_GAIN
    }

    /// Forget the differencer history. Called on every trigger.
    pub fn clear_history(&mut self) {
        self.last = 0.0;
    }

    pub fn phase(&self) -> f32 {
        self.phase.value()
    }

    pub fn reset(&mut self) {
        self.phase.reset();
        self.last = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn tonal() -> ClickSettings {
        ClickSettings {
            frequency: 200.0,
            level: 1.0,
            tone: 1.0,
        }
    }

    #[test]
    fn closed_gate_is_silent_but_phase_runs() {
        let mut click = ClickGenerator::new();
        let mut noise = NoiseSource::new();

        let out = click.next_sample(false, &tonal(), 1.0, &mut noise, SAMPLE_RATE);
        assert_eq!(out, 0.0);
        assert!(click.phase() > 0.0);

        let out = click.next_sample(true, &tonal(), 0.0, &mut noise, SAMPLE_RATE);
        assert_eq!(out, 0.0);
    }

    #[test]
    fn differencer_uses_previous_blend() {
        let mut click = ClickGenerator::new();
        let mut noise = NoiseSource::new();
        let settings = tonal();

        let first = click.next_sample(true, &settings, 1.0, &mut noise, SAMPLE_RATE);
        let p1 = click.phase();
        assert!((first - sine(p1) * CLICK_GAIN).abs() < 1e-5);

        let second = click.next_sample(true, &settings, 1.0, &mut noise, SAMPLE_RATE);
        let p2 = click.phase();
        let expected = (sine(p2) - sine(p1) * HIGH_PASS_COEFF) * CLICK_GAIN;
        assert!((second - expected).abs() < 1e-5, "expected {expected}, got {second}");
    }

    #[test]
    fn clear_history_restarts_differencer() {
        let mut click = ClickGenerator::new();
        let mut noise = NoiseSource::new();
        let settings = tonal();

        for _ in 0..32 {
            click.next_sample(true, &settings, 1.0, &mut noise, SAMPLE_RATE);
        }
        click.clear_history();
        let out = click.next_sample(true, &settings, 1.0, &mut noise, SAMPLE_RATE);
        assert!((out - sine(click.phase()) * CLICK_GAIN).abs() < 1e-5);
    }

    #[test]
    fn output_is_bounded_by_gain() {
        let mut click = ClickGenerator::new();
        let mut noise = NoiseSource::new();
        let settings = ClickSettings {
            frequency: 400.0,
            level: 1.0,
            tone: 0.0,
        };
        for _ in 0..10_000 {
            let out = click.next_sample(true, &settings, 1.0, &mut noise, SAMPLE_RATE);
            assert!(out.abs() <= (1.0 + HIGH_PASS_COEFF) * CLICK_GAIN);
        }
    }
}
