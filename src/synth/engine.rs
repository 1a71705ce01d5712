use log::{info, warn};

use crate::{
    assets::{self, Bitmap, PLACEHOLDER},
    dsp::envelope::EnvelopeState,
    error::InitError,
    params::{ParamId, ParameterStore},
    patch::PresetBank,
    synth::{
        message::{MessageReceiver, SynthMessage},
        voice::{Voice, ANY_NOTE},
    },
    OUTPUT_CHANNELS, SAMPLE_RATE,
};

const DEFAULT_PULSE_WIDTH: f32 = 0.5;
const MIN_PULSE_WIDTH: f32 = 0.05;
const MAX_PULSE_WIDTH: f32 = 0.95;

/// What the host offers at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeDesc {
    pub sample_rate: u32,
    pub output_channels: usize,
}

impl Default for RuntimeDesc {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE as u32,
            output_channels: OUTPUT_CHANNELS,
        }
    }
}

/// The kick engine: one voice plus its parameters.
///
/// Control calls and `render` take `&mut self`, so they can never overlap.
/// A host that drives the engine from another thread pushes
/// [`SynthMessage`]s into a ring buffer and lets the audio thread apply them
/// with [`KickSynth::render_with`] at the top of each block.
#[derive(Debug, Clone)]
pub struct KickSynth {
    voice: Voice,
    params: ParameterStore,
    pulse_width: f32,
}

impl KickSynth {
    pub fn new() -> Self {
        Self {
            voice: Voice::new(SAMPLE_RATE),
            params: ParameterStore::new(),
            pulse_width: DEFAULT_PULSE_WIDTH,
        }
    }

    /// Validate the host runtime, then start from a silent voice and table
    /// defaults.
    pub fn init(&mut self, desc: &RuntimeDesc) -> Result<(), InitError> {
        if desc.sample_rate != SAMPLE_RATE as u32 {
            warn!("rejecting runtime: {} Hz", desc.sample_rate);
            return Err(InitError::SampleRate(desc.sample_rate));
        }
        if desc.output_channels != OUTPUT_CHANNELS {
            warn!("rejecting runtime: {} output channels", desc.output_channels);
            return Err(InitError::Geometry(desc.output_channels));
        }

        self.voice.reset();
        self.params.restore_defaults();
        info!(
            "kick engine ready: {} Hz, {} channels",
            desc.sample_rate, desc.output_channels
        );
        Ok(())
    }

    /// Silence the voice. Every parameter, the filter switch and 24 dB mode
    /// included, keeps its current value.
    pub fn reset(&mut self) {
        self.voice.reset();
    }

    pub fn teardown(&mut self) {}

    pub fn suspend(&mut self) {}

    pub fn resume(&mut self) {}

    /// Render up to `frames` interleaved stereo frames into `out`. Both
    /// channels get the same sample. Returns the number of frames written.
    pub fn render(&mut self, out: &mut [f32], frames: usize) -> usize {
        let frames = frames.min(out.len() / OUTPUT_CHANNELS);
        for frame in out.chunks_exact_mut(OUTPUT_CHANNELS).take(frames) {
            let sample = self.voice.next_sample(&self.params, self.pulse_width);
            frame.fill(sample);
        }
        frames
    }

    /// Apply everything waiting in `rx`, then render.
    pub fn render_with<R: MessageReceiver>(
        &mut self,
        rx: &mut R,
        out: &mut [f32],
        frames: usize,
    ) -> usize {
        self.drain(rx);
        self.render(out, frames)
    }

    /// Pop and apply every pending message. Returns how many were applied.
    pub fn drain<R: MessageReceiver>(&mut self, rx: &mut R) -> usize {
        let mut applied = 0;
        while let Some(msg) = rx.pop() {
            self.handle_message(msg);
            applied += 1;
        }
        applied
    }

    pub fn handle_message(&mut self, msg: SynthMessage) {
        match msg {
            SynthMessage::NoteOn { note, velocity } => self.note_on(note, velocity),
            SynthMessage::NoteOff { note } => self.note_off(note),
            SynthMessage::GateOn { velocity } => self.gate_on(velocity),
            SynthMessage::GateOff => self.gate_off(),
            SynthMessage::AllNotesOff => self.all_note_off(),
            SynthMessage::PitchBend { value } => self.pitch_bend(value),
            SynthMessage::ChannelPressure { pressure } => self.channel_pressure(pressure),
            SynthMessage::Aftertouch { note, value } => self.aftertouch(note, value),
            SynthMessage::SetParameter { index, value } => self.set_parameter(index, value),
            SynthMessage::LoadPreset { index } => self.load_preset(index),
        }
    }

    pub fn note_on(&mut self, note: u8, velocity: u8) {
        self.voice.trigger(note, velocity);
    }

    pub fn note_off(&mut self, note: u8) {
        self.voice.release(note);
    }

    pub fn gate_on(&mut self, velocity: u8) {
        self.note_on(ANY_NOTE, velocity);
    }

    pub fn gate_off(&mut self) {
        self.note_off(ANY_NOTE);
    }

    pub fn all_note_off(&mut self) {
        self.note_off(ANY_NOTE);
    }

    pub fn pitch_bend(&mut self, _value: u16) {}

    pub fn channel_pressure(&mut self, _pressure: u8) {}

    pub fn aftertouch(&mut self, _note: u8, _value: u8) {}

    /// Writes to the reserved slot or past the table are dropped.
    pub fn set_parameter(&mut self, index: u8, value: i32) {
        self.params.set_index(index, value);
    }

    pub fn parameter_value(&self, index: u8) -> i32 {
        self.params.raw_index(index)
    }

    pub fn parameter_str_value(&self, index: u8, value: i32) -> &'static str {
        if index == ParamId::Osc2Waveform as u8 {
            assets::waveform_name(value)
        } else {
            PLACEHOLDER
        }
    }

    pub fn parameter_bmp_value(&self, index: u8, value: i32) -> &'static Bitmap {
        if index == ParamId::Osc2Waveform as u8 {
            assets::waveform_bitmap(value)
        } else {
            assets::waveform_bitmap(0)
        }
    }

    /// Load a factory preset. An unknown index changes nothing: the current
    /// sound stays and `preset_index` keeps reporting the last good preset
    /// rather than the rejected one.
    pub fn load_preset(&mut self, index: u8) {
        if PresetBank::load(index, &mut self.params) {
            self.voice.set_preset_index(index);
        }
    }

    pub fn preset_index(&self) -> u8 {
        self.voice.preset_index()
    }

    pub fn preset_name(index: u8) -> &'static str {
        PresetBank::name(index)
    }

    pub fn set_pulse_width(&mut self, width: f32) {
        if width.is_finite() {
            self.pulse_width = width.clamp(MIN_PULSE_WIDTH, MAX_PULSE_WIDTH);
        }
    }

    pub fn pulse_width(&self) -> f32 {
        self.pulse_width
    }

    pub fn state(&self) -> EnvelopeState {
        self.voice.state()
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }
}

impl Default for KickSynth {
    fn default() -> Self {
        Self::new()
    }
}
