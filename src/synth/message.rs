#[cfg(feature = "rtrb")]
use rtrb::Consumer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Control events sent from a host thread to the audio thread.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynthMessage {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8 },
    GateOn { velocity: u8 },
    GateOff,
    AllNotesOff,
    PitchBend { value: u16 },
    ChannelPressure { pressure: u8 },
    Aftertouch { note: u8, value: u8 },
    SetParameter { index: u8, value: i32 },
    LoadPreset { index: u8 },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}
