//! White noise for the secondary oscillator and the click.
//!
//! A linear congruential generator owned by the voice. No global state, so two
//! synth instances never share a sequence and rendering stays deterministic
//! after a reset.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const DEFAULT_SEED: u32 = 0x21;

#[derive(Debug, Clone)]
pub struct NoiseSource {
    state: u32,
}

impl NoiseSource {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform sample in `[-1.0, 1.0)`.
    #[inline]
    pub fn next_bipolar(&mut self) -> f32 {
        // Top 16 bits are the well-mixed ones for an LCG
        let word = (self.next_word() >> 16) as f32;
        word / 32_768.0 - 1.0
    }

    /// Back to the default seed, so the sequence repeats after a voice reset.
    pub fn reset(&mut self) {
        self.state = DEFAULT_SEED;
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range() {
        let mut noise = NoiseSource::new();
        for _ in 0..100_000 {
            let x = noise.next_bipolar();
            assert!((-1.0..1.0).contains(&x), "noise sample out of range: {x}");
        }
    }

    #[test]
    fn mean_is_near_zero() {
        let mut noise = NoiseSource::with_seed(7);
        let n = 48_000;
        let mean: f32 = (0..n).map(|_| noise.next_bipolar()).sum::<f32>() / n as f32;
        assert!(mean.abs() < 0.02, "noise is biased: mean {mean}");
    }

    #[test]
    fn reset_repeats_sequence() {
        let mut noise = NoiseSource::with_seed(99);
        noise.reset();
        let first: Vec<f32> = (0..16).map(|_| noise.next_bipolar()).collect();
        noise.reset();
        let second: Vec<f32> = (0..16).map(|_| noise.next_bipolar()).collect();
        assert_eq!(first, second);
    }
}
