//! Low-level DSP primitives used by the kick voice.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside the voice struct. They stay focused on the
//! signal-processing math; the voice in `synth` wires them together and feeds
//! them parameter values.

/// Attack click: noise/tone blend, differencer, envelope gate.
pub mod click;
/// Gain-then-tanh drive and the output limiter.
pub mod distortion;
/// Amplitude state machine and the linear decay envelopes.
pub mod envelope;
/// Leaky-integrator resonant low-pass, 12 or 24 dB/octave.
pub mod filter;
/// Sine-based frequency modulation of the body oscillator.
pub mod fm;
/// Per-voice white noise generator.
pub mod noise;
/// Phase accumulators, waveforms and the oscillator bank.
pub mod oscillator;

pub use envelope::EnvelopeState;
pub use filter::FilterMode;
pub use oscillator::Waveform;
