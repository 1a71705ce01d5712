use crate::{io::midi::MidiEvent, synth::message::SynthMessage};

/// Translate a MIDI event on `channel_filter` into an engine message.
/// Other channels and control changes yield `None`.
pub fn midi_to_synth(midi: MidiEvent, channel_filter: u8) -> Option<SynthMessage> {
    if midi.channel() != channel_filter {
        return None;
    }
    match midi {
        MidiEvent::NoteOn { key, velocity: 0, .. } => Some(SynthMessage::NoteOff { note: key }),
        MidiEvent::NoteOn { key, velocity, .. } => Some(SynthMessage::NoteOn {
            note: key,
            velocity,
        }),
        MidiEvent::NoteOff { key, .. } => Some(SynthMessage::NoteOff { note: key }),
        MidiEvent::ProgramChange { program, .. } => {
            Some(SynthMessage::LoadPreset { index: program })
        }
        MidiEvent::PitchBend { value, .. } => Some(SynthMessage::PitchBend { value }),
        MidiEvent::ChannelPressure { pressure, .. } => {
            Some(SynthMessage::ChannelPressure { pressure })
        }
        MidiEvent::PolyAftertouch { key, pressure, .. } => Some(SynthMessage::Aftertouch {
            note: key,
            value: pressure,
        }),
        MidiEvent::ControlChange { .. } => None,
    }
}
