use thiserror::Error;

/// Why a host runtime description was rejected.
///
/// These are the only failures the engine reports. They happen at setup, never
/// while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("unsupported sample rate {0} Hz, the engine runs at 48000 Hz")]
    SampleRate(u32),
    #[error("unsupported output geometry: {0} channels, the engine renders stereo")]
    Geometry(usize),
}
