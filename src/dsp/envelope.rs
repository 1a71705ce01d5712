#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Kick Envelopes
==============

A kick drum needs several envelopes running at once. One shapes the loudness,
the others shape pitch, the secondary oscillator and the attack click. All of
them restart on the same trigger.

Vocabulary
----------

  level       The envelope's current output value (0.0 to 1.0).

  stage       Which phase the amplitude envelope is in: Off, Attack, Decay
              or Release. A state machine governs transitions.

  trigger     A note-on or gate-on. Restarts every envelope at once.

  increment   How much `level` changes per sample. Calculated from the stage
              duration (in milliseconds) and the sample rate:

                  increment = 1 / (time_ms / 1000 * sample_rate)

  decay env   A one-shot ramp from 1.0 down to 0.0. It never rises on its own;
              only a trigger sets it back to 1.0.


The Amplitude State Machine
---------------------------

    ┌─────┐  trigger   ┌────────┐  level=1   ┌───────┐
    │ Off │ ─────────→ │ Attack │ ─────────→ │ Decay │
    └─────┘            └────────┘            └───────┘
       ↑                    │ note_off           │ note_off
       │                    ↓                    ↓
       │   level=0    ┌─────────┐          ┌─────────┐
       └───────────── │ Release │ ←─────── │ (same)  │
                      └─────────┘          └─────────┘

There is no sustain stage. A kick rings out once Attack completes: Decay
falls straight back to zero using the *release* time. Release is only reached
early, through a note-off, and falls at the same rate.


The Decay Envelopes
-------------------

    Level
      1.0 ┐╲
          │ ╲        pitch   (decay_ms)
          │  ╲╲      osc2    (osc2_decay_ms)
          │   ╲ ╲╲   click   (click_decay_ms)
      0.0 └────╲──╲╲──────────→ Time

Each decay envelope only moves while the amplitude envelope is sounding.
When the amplitude envelope returns to Off, the decays are parked at zero so
nothing can leak into the next silent stretch.


Precision
---------

The amplitude ramp is accumulated in f64. Summing thousands of f32
increments drifts far enough that Attack could finish a sample late; the
wider accumulator keeps the Attack → Decay transition on the sample where
n * increment first reaches 1.0.
*/

/// Accumulated rounding allowed when testing a ramp against its end point.
const RAMP_EPSILON: f64 = 1e-9;

/// Per-sample increment for a linear ramp that spans `time_ms`.
#[inline]
fn ramp_increment(time_ms: f32, sample_rate: f32) -> f64 {
    1.0 / (f64::from(time_ms) * f64::from(sample_rate) / 1000.0)
}

/// The current stage of the amplitude envelope.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Off,     // Silent, waiting for a trigger
    Attack,  // Ramping up to 1.0
    Decay,   // Peak reached, falling at the release rate
    Release, // Note-off received, falling at the release rate
}

/// Attack/decay/release amplitude envelope.
#[derive(Debug, Clone)]
pub struct AmpEnvelope {
    stage: EnvelopeState,
    level: f64,
}

impl AmpEnvelope {
    pub fn new() -> Self {
        Self {
            stage: EnvelopeState::Off,
            level: 0.0,
        }
    }

    /// Restart from zero in the Attack stage, whatever the current stage.
    pub fn trigger(&mut self) {
        self.level = 0.0;
        self.stage = EnvelopeState::Attack;
    }

    /// Enter Release from the current level. Ignored while Off.
    pub fn release(&mut self) {
        if self.stage != EnvelopeState::Off {
            self.stage = EnvelopeState::Release;
        }
    }

    /// Advance one sample and return the new level.
    pub fn next_sample(&mut self, attack_ms: f32, release_ms: f32, sample_rate: f32) -> f32 {
        match self.stage {
            EnvelopeState::Off => {}

            EnvelopeState::Attack => {
                self.level += ramp_increment(attack_ms, sample_rate);
                if self.level >= 1.0 - RAMP_EPSILON {
                    self.level = 1.0;
                    self.stage = EnvelopeState::Decay;
                }
            }

            EnvelopeState::Decay | EnvelopeState::Release => {
                self.level -= ramp_increment(release_ms, sample_rate);
                if self.level <= RAMP_EPSILON {
                    self.level = 0.0;
                    self.stage = EnvelopeState::Off;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
        self.level as f32
    }

    pub fn reset(&mut self) {
        self.stage = EnvelopeState::Off;
        self.level = 0.0;
    }

    pub fn level(&self) -> f32 {
        self.level as f32
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }

    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeState::Off
    }
}

impl Default for AmpEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot linear fall from 1.0 to 0.0.
#[derive(Debug, Clone, Default)]
pub struct DecayEnvelope {
    level: f32,
}

impl DecayEnvelope {
    pub fn new() -> Self {
        Self { level: 0.0 }
    }

    pub fn trigger(&mut self) {
        self.level = 1.0;
    }

    pub fn next_sample(&mut self, decay_ms: f32, sample_rate: f32) -> f32 {
        self.level -= 1.0 / (decay_ms / 1000.0 * sample_rate);
        if self.level < 0.0 {
            self.level = 0.0;
        }
        self.level
    }

    pub fn reset(&mut self) {
        self.level = 0.0;
    }

    pub fn level(&self) -> f32 {
        self.level
    }
}

/// Stage times in milliseconds, read from the parameter store each sample.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeTimes {
    pub attack_ms: f32,
    pub release_ms: f32,
    pub pitch_decay_ms: f32,
    pub osc2_decay_ms: f32,
    pub click_decay_ms: f32,
}

/// Current output of every envelope after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeLevels {
    pub amplitude: f32,
    pub pitch: f32,
    pub osc2: f32,
    pub click: f32,
}

/// The amplitude envelope plus the three decays that share its trigger.
#[derive(Debug, Clone, Default)]
pub struct EnvelopeEngine {
    amp: AmpEnvelope,
    pitch: DecayEnvelope,
    osc2: DecayEnvelope,
    click: DecayEnvelope,
}

impl EnvelopeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self) {
        self.amp.trigger();
        self.pitch.trigger();
        self.osc2.trigger();
        self.click.trigger();
    }

    pub fn release(&mut self) {
        self.amp.release();
    }

    pub fn next_sample(&mut self, times: &EnvelopeTimes, sample_rate: f32) -> EnvelopeLevels {
        let was_active = self.amp.is_active();
        let amplitude = self.amp.next_sample(times.attack_ms, times.release_ms, sample_rate);

        if self.amp.is_active() {
            self.pitch.next_sample(times.pitch_decay_ms, sample_rate);
            self.osc2.next_sample(times.osc2_decay_ms, sample_rate);
            self.click.next_sample(times.click_decay_ms, sample_rate);
        } else if was_active {
            // Amplitude just finished: park the decays until the next trigger
            self.pitch.reset();
            self.osc2.reset();
            self.click.reset();
        }

        EnvelopeLevels {
            amplitude,
            pitch: self.pitch.level(),
            osc2: self.osc2.level(),
            click: self.click.level(),
        }
    }

    pub fn reset(&mut self) {
        self.amp.reset();
        self.pitch.reset();
        self.osc2.reset();
        self.click.reset();
    }

    pub fn state(&self) -> EnvelopeState {
        self.amp.state()
    }

    pub fn is_active(&self) -> bool {
        self.amp.is_active()
    }

    pub fn levels(&self) -> EnvelopeLevels {
        EnvelopeLevels {
            amplitude: self.amp.level(),
            pitch: self.pitch.level(),
            osc2: self.osc2.level(),
            click: self.click.level(),
        }
    }
}
