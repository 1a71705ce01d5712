//! Factory presets.
//!
//! A preset is a complete parameter snapshot in host units. Loading one writes
//! every live slot, so nothing from the previous sound leaks through.

use crate::{
    assets::PLACEHOLDER,
    params::{ParamId, ParameterStore},
};

pub const PRESET_COUNT: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub settings: &'static [(ParamId, i32)],
}

impl Preset {
    /// Write every setting into `store`.
    pub fn apply(&self, store: &mut ParameterStore) {
        for &(id, raw) in self.settings {
            store.set(id, raw);
        }
    }

    /// Host value this preset stores for `id`, if it sets one.
    pub fn get(&self, id: ParamId) -> Option<i32> {
        self.settings
            .iter()
            .find(|(slot, _)| *slot == id)
            .map(|&(_, raw)| raw)
    }
}

use ParamId::*;

#[rustfmt::skip]
pub static PRESETS: [Preset; PRESET_COUNT] = [
    Preset {
        name: "Basic",
        settings: &[
            (Pitch, 55), (Decay, 130), (PitchCurve, 50), (BodyLevel, 90), (Drive, 40),
            (Attack, 3), (Release, 300),
            (ClickLevel, 50), (ClickFreq, 200), (ClickDecay, 20), (ClickTone, 60),
            (FilterEnabled, 0), (FilterCutoff, 70), (FilterResonance, 20), (FilterMode, 0),
            (Osc2Enabled, 0), (Osc2Waveform, 0), (Osc2Pitch, 20), (Osc2Level, 0),
            (FmAmount, 0), (FmRatio, 20), (Osc2Decay, 100),
        ],
    },
    Preset {
        name: "Punchy",
        settings: &[
            (Pitch, 70), (Decay, 80), (PitchCurve, 70), (BodyLevel, 90), (Drive, 60),
            (Attack, 1), (Release, 180),
            (ClickLevel, 80), (ClickFreq, 250), (ClickDecay, 15), (ClickTone, 50),
            (FilterEnabled, 1), (FilterCutoff, 90), (FilterResonance, 30), (FilterMode, 0),
            (Osc2Enabled, 0), (Osc2Waveform, 0), (Osc2Pitch, 20), (Osc2Level, 0),
            (FmAmount, 0), (FmRatio, 20), (Osc2Decay, 100),
        ],
    },
    Preset {
        name: "Sub Bass",
        settings: &[
            (Pitch, 45), (Decay, 250), (PitchCurve, 30), (BodyLevel, 95), (Drive, 35),
            (Attack, 8), (Release, 500),
            (ClickLevel, 30), (ClickFreq, 180), (ClickDecay, 25), (ClickTone, 70),
            (FilterEnabled, 1), (FilterCutoff, 60), (FilterResonance, 10), (FilterMode, 1),
            (Osc2Enabled, 0), (Osc2Waveform, 0), (Osc2Pitch, 20), (Osc2Level, 0),
            (FmAmount, 0), (FmRatio, 20), (Osc2Decay, 100),
        ],
    },
    Preset {
        name: "FM Kick",
        settings: &[
            (Pitch, 55), (Decay, 180), (PitchCurve, 60), (BodyLevel, 70), (Drive, 50),
            (Attack, 3), (Release, 250),
            (ClickLevel, 40), (ClickFreq, 220), (ClickDecay, 18), (ClickTone, 80),
            (FilterEnabled, 1), (FilterCutoff, 85), (FilterResonance, 40), (FilterMode, 0),
            (Osc2Enabled, 1), (Osc2Waveform, 0), (Osc2Pitch, 30), (Osc2Level, 60),
            (FmAmount, 70), (FmRatio, 27), (Osc2Decay, 80),
        ],
    },
    Preset {
        name: "Noise Attack",
        settings: &[
            (Pitch, 50), (Decay, 200), (PitchCurve, 50), (BodyLevel, 85), (Drive, 40),
            (Attack, 2), (Release, 280),
            (ClickLevel, 70), (ClickFreq, 300), (ClickDecay, 12), (ClickTone, 30),
            (FilterEnabled, 1), (FilterCutoff, 95), (FilterResonance, 30), (FilterMode, 0),
            (Osc2Enabled, 1), (Osc2Waveform, 4), (Osc2Pitch, 10), (Osc2Level, 70),
            (FmAmount, 0), (FmRatio, 10), (Osc2Decay, 20),
        ],
    },
];

/// Read-only view over the factory table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetBank;

impl PresetBank {
    pub fn get(index: u8) -> Option<&'static Preset> {
        PRESETS.get(usize::from(index))
    }

    /// Apply preset `index` to `store`. Returns false and leaves the store
    /// untouched when the index is out of range.
    pub fn load(index: u8, store: &mut ParameterStore) -> bool {
        match Self::get(index) {
            Some(preset) => {
                preset.apply(store);
                true
            }
            None => false,
        }
    }

    pub fn name(index: u8) -> &'static str {
        Self::get(index).map_or(PLACEHOLDER, |preset| preset.name)
    }
}
