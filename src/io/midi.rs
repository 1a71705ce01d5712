/// Channel-voice MIDI messages. Channels are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    PolyAftertouch { channel: u8, key: u8, pressure: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    ProgramChange { channel: u8, program: u8 },
    ChannelPressure { channel: u8, pressure: u8 },
    /// 14-bit bend, 0x2000 is centre.
    PitchBend { channel: u8, value: u16 },
}

impl MidiEvent {
    /// Parse one complete message. Running status, system messages and
    /// short reads return `None`.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let (&status, data) = bytes.split_first()?;
        if status & 0x80 == 0 || status >= 0xF0 {
            return None;
        }
        let channel = status & 0x0F;
        let byte = |i: usize| data.get(i).map(|b| b & 0x7F);

        let event = match status & 0xF0 {
            0x80 => MidiEvent::NoteOff {
                channel,
                key: byte(0)?,
                velocity: byte(1)?,
            },
            0x90 => MidiEvent::NoteOn {
                channel,
                key: byte(0)?,
                velocity: byte(1)?,
            },
            0xA0 => MidiEvent::PolyAftertouch {
                channel,
                key: byte(0)?,
                pressure: byte(1)?,
            },
            0xB0 => MidiEvent::ControlChange {
                channel,
                controller: byte(0)?,
                value: byte(1)?,
            },
            0xC0 => MidiEvent::ProgramChange {
                channel,
                program: byte(0)?,
            },
            0xD0 => MidiEvent::ChannelPressure {
                channel,
                pressure: byte(0)?,
            },
            0xE0 => MidiEvent::PitchBend {
                channel,
                value: u16::from(byte(0)?) | (u16::from(byte(1)?) << 7),
            },
            _ => return None,
        };
        Some(event)
    }

    pub fn channel(&self) -> u8 {
        match *self {
            MidiEvent::NoteOn { channel, .. }
            | MidiEvent::NoteOff { channel, .. }
            | MidiEvent::PolyAftertouch { channel, .. }
            | MidiEvent::ControlChange { channel, .. }
            | MidiEvent::ProgramChange { channel, .. }
            | MidiEvent::ChannelPressure { channel, .. }
            | MidiEvent::PitchBend { channel, .. } => channel,
        }
    }
}
