use crate::{
    dsp::{
        click::{ClickGenerator, ClickSettings},
        distortion::{drive, hard_clip},
        envelope::{EnvelopeEngine, EnvelopeLevels, EnvelopeState, EnvelopeTimes},
        filter::{Coefficients, LadderFilter},
        noise::NoiseSource,
        oscillator::{OscillatorBank, OscillatorSettings},
    },
    params::{ParamId, ParameterStore},
};

/// Note id that matches whatever note is sounding.
pub const ANY_NOTE: u8 = 0xFF;

/// Gain applied after the filter, before the amplitude envelope.
pub const MAKEUP_GAIN: f32 = 1.3;

/// The single kick voice: every piece of per-hit state.
#[derive(Debug, Clone)]
pub struct Voice {
    envelopes: EnvelopeEngine,
    oscillators: OscillatorBank,
    click: ClickGenerator,
    filter: LadderFilter,
    noise: NoiseSource,
    note: u8,
    velocity: f32,
    preset_index: u8,
    sample_rate: f32,
}

impl Voice {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            envelopes: EnvelopeEngine::new(),
            oscillators: OscillatorBank::new(),
            click: ClickGenerator::new(),
            filter: LadderFilter::new(),
            noise: NoiseSource::new(),
            note: 0,
            velocity: 0.0,
            preset_index: 0,
            sample_rate,
        }
    }

    /// Restart the hit. Phases keep running; envelopes, filter and click
    /// history start over.
    pub fn trigger(&mut self, note: u8, velocity: u8) {
        self.note = note;
        self.velocity = f32::from(velocity.min(127)) / 127.0;
        self.envelopes.trigger();
        self.filter.reset();
        self.click.clear_history();
    }

    /// Release if `note` is the sounding note or [`ANY_NOTE`].
    pub fn release(&mut self, note: u8) {
        if note == ANY_NOTE || note == self.note {
            self.envelopes.release();
        }
    }

    /// Back to silence. The preset index is kept.
    pub fn reset(&mut self) {
        self.envelopes.reset();
        self.oscillators.reset();
        self.click.reset();
        self.filter.reset();
        self.noise.reset();
        self.note = 0;
        self.velocity = 0.0;
    }

    /// Render one mono sample.
    #[inline]
    pub fn next_sample(&mut self, params: &ParameterStore, pulse_width: f32) -> f32 {
        let sr = self.sample_rate;

        let times = EnvelopeTimes {
            attack_ms: params.value(ParamId::Attack),
            release_ms: params.value(ParamId::Release),
            pitch_decay_ms: params.value(ParamId::Decay),
            osc2_decay_ms: params.value(ParamId::Osc2Decay),
            click_decay_ms: params.value(ParamId::ClickDecay),
        };
        let env = self.envelopes.next_sample(&times, sr);

        let osc_settings = OscillatorSettings {
            base_pitch: params.value(ParamId::Pitch),
            pitch_curve: params.value(ParamId::PitchCurve),
            body_level: params.value(ParamId::BodyLevel),
            osc2_enabled: params.flag(ParamId::Osc2Enabled),
            waveform: params.waveform(),
            osc2_ratio: params.value(ParamId::Osc2Pitch),
            osc2_level: params.value(ParamId::Osc2Level),
            fm_amount: params.value(ParamId::FmAmount),
            fm_ratio: params.value(ParamId::FmRatio),
            pulse_width,
        };
        let osc = self
            .oscillators
            .next_sample(&osc_settings, env.pitch, env.osc2, &mut self.noise, sr);

        let click_settings = ClickSettings {
            frequency: params.value(ParamId::ClickFreq),
            level: params.value(ParamId::ClickLevel),
            tone: params.value(ParamId::ClickTone),
        };
        let gate = self.envelopes.is_active();
        let click = self
            .click
            .next_sample(gate, &click_settings, env.click, &mut self.noise, sr);

        let mut out = drive(osc.body + osc.secondary + click, params.value(ParamId::Drive));

        if params.flag(ParamId::FilterEnabled) {
            let mode = params.filter_mode();
            let coeffs = Coefficients::new(
                params.value(ParamId::FilterCutoff),
                params.value(ParamId::FilterResonance),
                mode,
            );
            out = self.filter.process_with(out, &coeffs, mode);
        }

        out *= MAKEUP_GAIN;
        out *= env.amplitude * self.velocity;
        hard_clip(out, 1.0)
    }

    pub fn note(&self) -> u8 {
        self.note
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn preset_index(&self) -> u8 {
        self.preset_index
    }

    pub(crate) fn set_preset_index(&mut self, index: u8) {
        self.preset_index = index;
    }

    pub fn state(&self) -> EnvelopeState {
        self.envelopes.state()
    }

    pub fn is_active(&self) -> bool {
        self.envelopes.is_active()
    }

    pub fn envelope_levels(&self) -> EnvelopeLevels {
        self.envelopes.levels()
    }

    /// Body, secondary and click phases.
    pub fn phases(&self) -> [f32; 3] {
        [
            self.oscillators.body_phase(),
            self.oscillators.secondary_phase(),
            self.click.phase(),
        ]
    }

    pub fn filter_state(&self) -> &[f32; 4] {
        self.filter.state()
    }
}
