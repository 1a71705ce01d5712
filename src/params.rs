//! Host parameter table and the store the voice reads from.
//!
//! The host talks in integers: percentages, tenths, milliseconds, Hz. The DSP
//! graph wants floats in its own units. Every slot carries its unit in the
//! table below, and the unit alone decides the conversion, so there is exactly
//! one place where "50" becomes 0.5.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{filter::FilterMode, oscillator::Waveform};

/// Number of host parameter slots, including the reserved one.
pub const PARAM_COUNT: usize = 23;

/// Slot 7 is an empty page filler in the host layout.
pub const RESERVED_SLOT: u8 = 7;

/// How a host integer maps to the value the DSP code uses.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    None,
    Hertz,
    Millis,
    /// 0..100 → 0.0..1.0
    Percent,
    /// 0 or 1 → 0.0 or 1.0
    OnOff,
    /// Waveform index, passed through.
    Waveform,
    /// Ratio in tenths: 27 → 2.7
    Tenths,
}

impl ParamUnit {
    pub fn to_internal(self, raw: i32) -> f32 {
        match self {
            ParamUnit::Percent => raw as f32 / 100.0,
            ParamUnit::Tenths => raw as f32 / 10.0,
            ParamUnit::OnOff => {
                if raw > 0 {
                    1.0
                } else {
                    0.0
                }
            }
            ParamUnit::None | ParamUnit::Hertz | ParamUnit::Millis | ParamUnit::Waveform => {
                raw as f32
            }
        }
    }
}

/// Metadata for one host slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub center: i32,
    pub default: i32,
    pub unit: ParamUnit,
}

impl ParamSpec {
    const fn new(
        name: &'static str,
        min: i32,
        max: i32,
        center: i32,
        default: i32,
        unit: ParamUnit,
    ) -> Self {
        Self {
            name,
            min,
            max,
            center,
            default,
            unit,
        }
    }

    pub fn clamp(&self, raw: i32) -> i32 {
        raw.clamp(self.min, self.max)
    }
}

#[rustfmt::skip]
pub static PARAM_TABLE: [ParamSpec; PARAM_COUNT] = [
    // Page 1: body
    ParamSpec::new("PITCH",      40,  150,  40,  60, ParamUnit::Hertz),
    ParamSpec::new("DECAY",      10,  500,  10, 150, ParamUnit::Millis),
    ParamSpec::new("BODY",        0,  100,   0,  50, ParamUnit::Percent),
    ParamSpec::new("DRIVE",       0,  100,   0,  40, ParamUnit::Percent),
    // Page 2: envelope
    ParamSpec::new("ATTACK",      0,   50,   0,   2, ParamUnit::Millis),
    ParamSpec::new("RELEASE",    10, 1000,  10, 300, ParamUnit::Millis),
    ParamSpec::new("P.CURVE",     0,  100,   0,  50, ParamUnit::Percent),
    ParamSpec::new("",            0,    0,   0,   0, ParamUnit::None),
    // Page 3: click
    ParamSpec::new("CLICK LVL",   0,  100,   0,  50, ParamUnit::Percent),
    ParamSpec::new("CLICK FREQ", 50,  400, 100, 200, ParamUnit::Hertz),
    ParamSpec::new("CLICK DCY",   1,  100,  10,  20, ParamUnit::Millis),
    ParamSpec::new("CLICK TONE",  0,  100,   0,  60, ParamUnit::Percent),
    // Page 4: filter
    ParamSpec::new("FILTER ON",   0,    1,   0,   0, ParamUnit::OnOff),
    ParamSpec::new("CUTOFF",      0,  100,   0,  70, ParamUnit::Percent),
    ParamSpec::new("RESONANCE",   0,  100,   0,  20, ParamUnit::Percent),
    ParamSpec::new("24DB MODE",   0,    1,   0,   0, ParamUnit::OnOff),
    // Page 5: secondary oscillator
    ParamSpec::new("OSC2 ON",     0,    1,   0,   1, ParamUnit::OnOff),
    ParamSpec::new("OSC2 WAVE",   0,    4,   0,   0, ParamUnit::Waveform),
    ParamSpec::new("OSC2 PITCH",  5,   60,   5,  20, ParamUnit::Tenths),
    ParamSpec::new("OSC2 LEVEL",  0,  100,   0,  50, ParamUnit::Percent),
    // Page 6: FM
    ParamSpec::new("FM AMOUNT",   0,  100,   0,   0, ParamUnit::Percent),
    ParamSpec::new("FM RATIO",    5,   50,   5,  20, ParamUnit::Tenths),
    ParamSpec::new("OSC2 DECAY", 10,  500,  10, 100, ParamUnit::Millis),
];

/// A live parameter, numbered by its host slot.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParamId {
    Pitch = 0,
    Decay = 1,
    BodyLevel = 2,
    Drive = 3,
    Attack = 4,
    Release = 5,
    PitchCurve = 6,
    ClickLevel = 8,
    ClickFreq = 9,
    ClickDecay = 10,
    ClickTone = 11,
    FilterEnabled = 12,
    FilterCutoff = 13,
    FilterResonance = 14,
    FilterMode = 15,
    Osc2Enabled = 16,
    Osc2Waveform = 17,
    Osc2Pitch = 18,
    Osc2Level = 19,
    FmAmount = 20,
    FmRatio = 21,
    Osc2Decay = 22,
}

impl ParamId {
    pub const ALL: [ParamId; PARAM_COUNT - 1] = [
        ParamId::Pitch,
        ParamId::Decay,
        ParamId::BodyLevel,
        ParamId::Drive,
        ParamId::Attack,
        ParamId::Release,
        ParamId::PitchCurve,
        ParamId::ClickLevel,
        ParamId::ClickFreq,
        ParamId::ClickDecay,
        ParamId::ClickTone,
        ParamId::FilterEnabled,
        ParamId::FilterCutoff,
        ParamId::FilterResonance,
        ParamId::FilterMode,
        ParamId::Osc2Enabled,
        ParamId::Osc2Waveform,
        ParamId::Osc2Pitch,
        ParamId::Osc2Level,
        ParamId::FmAmount,
        ParamId::FmRatio,
        ParamId::Osc2Decay,
    ];

    /// The live parameter at a host slot. `None` for the reserved slot and
    /// anything past the end of the table.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            RESERVED_SLOT => None,
            i if i < RESERVED_SLOT => Self::ALL.get(usize::from(i)).copied(),
            i => Self::ALL.get(usize::from(i) - 1).copied(),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static ParamSpec {
        &PARAM_TABLE[self.index()]
    }
}

/// Current parameter values, kept both as host integers and in DSP units.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    raw: [i32; PARAM_COUNT],
    values: [f32; PARAM_COUNT],
}

impl ParameterStore {
    pub fn new() -> Self {
        let mut store = Self {
            raw: [0; PARAM_COUNT],
            values: [0.0; PARAM_COUNT],
        };
        store.restore_defaults();
        store
    }

    pub fn restore_defaults(&mut self) {
        for id in ParamId::ALL {
            self.set(id, id.spec().default);
        }
    }

    /// Store a host value, clamped to the slot's range.
    pub fn set(&mut self, id: ParamId, raw: i32) {
        let spec = id.spec();
        let raw = spec.clamp(raw);
        self.raw[id.index()] = raw;
        self.values[id.index()] = spec.unit.to_internal(raw);
    }

    /// Store by host slot. Returns false, changing nothing, for the reserved
    /// slot or an index past the table.
    pub fn set_index(&mut self, index: u8, raw: i32) -> bool {
        match ParamId::from_index(index) {
            Some(id) => {
                self.set(id, raw);
                true
            }
            None => false,
        }
    }

    pub fn raw(&self, id: ParamId) -> i32 {
        self.raw[id.index()]
    }

    /// Host value by slot; 0 for the reserved slot or an unknown index.
    pub fn raw_index(&self, index: u8) -> i32 {
        ParamId::from_index(index).map_or(0, |id| self.raw(id))
    }

    /// Value in DSP units.
    #[inline]
    pub fn value(&self, id: ParamId) -> f32 {
        self.values[id.index()]
    }

    #[inline]
    pub fn flag(&self, id: ParamId) -> bool {
        self.value(id) > 0.5
    }

    pub fn waveform(&self) -> Waveform {
        Waveform::from_index(self.raw(ParamId::Osc2Waveform)).unwrap_or_default()
    }

    pub fn filter_mode(&self) -> FilterMode {
        FilterMode::from_flag(self.flag(ParamId::FilterMode))
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
