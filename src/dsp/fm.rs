//! Frequency modulation of the body oscillator.
//!
//! The modulator is always a sine read from the secondary oscillator's phase,
//! whatever waveform the secondary oscillator plays. FM depth therefore stays
//! smooth even when the audible secondary is a pulse or noise.

use crate::dsp::oscillator::sine;

/// Hz of deviation at full FM amount and full envelope.
pub const FM_DEPTH_HZ: f32 = 100.0;

/// Frequency offset in Hz added to the body oscillator.
#[inline]
pub fn fm_offset(modulator_phase: f32, amount: f32, envelope: f32) -> f32 {
    sine(modulator_phase) * amount * envelope * FM_DEPTH_HZ
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_deviation_is_depth_times_amount() {
        let offset = fm_offset(0.25, 0.7, 1.0);
        assert!((offset - 70.0).abs() < 1e-3, "got {offset}");
    }

    #[test]
    fn envelope_scales_deviation() {
        let full = fm_offset(0.75, 1.0, 1.0);
        let half = fm_offset(0.75, 1.0, 0.5);
        assert!((full + 100.0).abs() < 1e-3);
        assert!((half - full * 0.5).abs() < 1e-4);
    }

    #[test]
    fn closed_envelope_removes_modulation() {
        assert_eq!(fm_offset(0.3, 1.0, 0.0), 0.0);
    }
}
