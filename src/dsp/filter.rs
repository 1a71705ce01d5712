#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Resonant Low-Pass
=================

A cascade of leaky integrators with output fed back to the input. Two
stages give 12 dB/octave, four give 24 dB/octave.

Vocabulary
----------

  stage       One leaky integrator: s = input + 0.3·s. Each stage smooths
              the signal a little more and adds 6 dB/octave of roll-off.

  feedback    Output subtracted from the input, scaled by `fb`. Near the
              cutoff the fed-back signal comes round in phase and builds a
              resonant peak.

  f           Cutoff coefficient, 1.16 × the pre-scaled cutoff.


Signal Flow
-----------

             ┌────────────── × fb ◄───────────────────┐
             ▼                                        │
    x ──► (x − fb·out) ── × g ──► [s0] ──► [s1] ──► ... ──► out
                                  2-pole: out = s1
                                  4-pole: out = s3

    12 dB:  fb = r'·2.5·(1 − 0.2f²)    g = 0.35013·f²
    24 dB:  fb = r'·4.0·(1 − 0.15f²)   g = 0.35013·f⁴


Stability
---------

The loop can run away if `fb` grows too large for the stage gain. The knobs
are pre-scaled before any coefficient is derived:

    cutoff'    = 0.9·cutoff + 0.1     (0.1 to 1.0)
    resonance' = 0.98·resonance       (0.0 to 0.98)

With those limits every pole of both topologies sits inside the unit circle,
so the filter rings down instead of self-oscillating, even with cutoff and
resonance at maximum. The scaling is part of the filter, not a UI nicety.
*/

const STAGE_LEAK: f32 = 0.3;
const INPUT_GAIN: f32 = 0.35013;
const CUTOFF_SCALE: f32 = 1.16;

/// Filter slope.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// 2-pole, 12 dB/octave.
    #[default]
    TwoPole,
    /// 4-pole, 24 dB/octave.
    FourPole,
}

impl FilterMode {
    pub fn from_flag(four_pole: bool) -> Self {
        if four_pole {
            FilterMode::FourPole
        } else {
            FilterMode::TwoPole
        }
    }
}

/// Map a normalized cutoff (0..1) onto the stable 0.1..1.0 range.
#[inline]
pub fn scale_cutoff(cutoff: f32) -> f32 {
    cutoff * 0.9 + 0.1
}

/// Map a normalized resonance (0..1) to just below self-oscillation.
#[inline]
pub fn scale_resonance(resonance: f32) -> f32 {
    resonance * 0.98
}

/// Feedback amount and input gain derived from normalized cutoff and resonance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub feedback: f32,
    pub gain: f32,
}

impl Coefficients {
    pub fn new(cutoff: f32, resonance: f32, mode: FilterMode) -> Self {
        let f = scale_cutoff(cutoff) * CUTOFF_SCALE;
        let r = scale_resonance(resonance);
        let f2 = f * f;
        match mode {
            FilterMode::TwoPole => Self {
                feedback: r * 2.5 * (1.0 - 0.2 * f2),
                gain: INPUT_GAIN * f2,
            },
            FilterMode::FourPole => Self {
                feedback: r * 4.0 * (1.0 - 0.15 * f2),
                gain: INPUT_GAIN * f2 * f2,
            },
        }
    }
}

/// Leaky-integrator ladder with feedback resonance.
#[derive(Debug, Clone, Default)]
pub struct LadderFilter {
    state: [f32; 4],
}

impl LadderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter one sample. `cutoff` and `resonance` are normalized 0..1.
    #[inline]
    pub fn process(&mut self, input: f32, cutoff: f32, resonance: f32, mode: FilterMode) -> f32 {
        let coeffs = Coefficients::new(cutoff, resonance, mode);
        self.process_with(input, &coeffs, mode)
    }

    #[inline]
    pub fn process_with(&mut self, input: f32, coeffs: &Coefficients, mode: FilterMode) -> f32 {
        let s = &mut self.state;
        match mode {
            FilterMode::TwoPole => {
                let x = (input - s[1] * coeffs.feedback) * coeffs.gain;
                s[0] = x + STAGE_LEAK * s[0];
                s[1] = s[0] + STAGE_LEAK * s[1];
                s[1]
            }
            FilterMode::FourPole => {
                let x = (input - s[3] * coeffs.feedback) * coeffs.gain;
                s[0] = x + STAGE_LEAK * s[0];
                s[1] = s[0] + STAGE_LEAK * s[1];
                s[2] = s[1] + STAGE_LEAK * s[2];
                s[3] = s[2] + STAGE_LEAK * s[3];
                s[3]
            }
        }
    }

    /// Filter a whole buffer in place with fixed settings.
    pub fn render(&mut self, buffer: &mut [f32], cutoff: f32, resonance: f32, mode: FilterMode) {
        let coeffs = Coefficients::new(cutoff, resonance, mode);
        for sample in buffer.iter_mut() {
            *sample = self.process_with(*sample, &coeffs, mode);
        }
    }

    pub fn state(&self) -> &[f32; 4] {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = [0.0; 4];
    }
}
