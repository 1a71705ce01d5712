//! Whole-engine benchmarks.
//!
//! Each factory preset is rendered through `KickSynth` exactly as a host
//! would drive it: interleaved stereo, retriggered every block.

mod presets;

pub use presets::bench_presets;
