// Purpose: the kick voice, the engine around it, and its control messages

pub mod engine;
pub mod message;
pub mod voice;

pub use engine::{KickSynth, RuntimeDesc};
pub use message::{MessageReceiver, SynthMessage};
pub use voice::{Voice, ANY_NOTE};
