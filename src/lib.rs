pub mod assets; // Display strings and bitmaps
pub mod dsp;
pub mod error;
pub mod io;
pub mod params; // Host parameter table
pub mod patch; // Factory presets
pub mod synth; // The kick voice and engine

pub use error::InitError;
pub use params::{ParamId, ParameterStore};
pub use synth::{KickSynth, MessageReceiver, RuntimeDesc, SynthMessage};

/// The only sample rate the engine runs at.
pub const SAMPLE_RATE: f32 = 48_000.0;
/// Interleaved stereo output.
pub const OUTPUT_CHANNELS: usize = 2;
