//! Drive / Waveshaping
//!
//! Drive adds harmonics by pushing the summed kick into a tanh curve. The
//! "drive" amount (0.0 to 1.0) sets both the input gain and a matching output
//! trim so heavier drive thickens the sound without making it much louder.
//!
//! # Transfer Function
//!
//!   gain   = 1 + 4·drive
//!   trim   = 1 / (1 + 1.5·drive)
//!   output = tanh(input · gain) · trim
//!
//! At drive 0.0 the stage is skipped entirely, so a clean patch stays
//! bit-exact.
//!
//! # Drive Values
//!
//!   0.0   = Clean (bypassed)
//!   0.3   = Warm saturation, input gain 2.2
//!   0.6   = Obvious distortion, input gain 3.4
//!   1.0   = Heavy, input gain 5.0, output trimmed to 0.4

const DRIVE_GAIN: f32 = 4.0;
const DRIVE_TRIM: f32 = 1.5;

/// Gain, tanh saturation, then output trim.
#[inline]
pub fn drive(sample: f32, amount: f32) -> f32 {
    if amount <= 0.0 {
        return sample;
    }
    let x = sample * (1.0 + amount * DRIVE_GAIN);
    x.tanh() * (1.0 / (1.0 + amount * DRIVE_TRIM))
}

/// Hard clipping at ±threshold. NaN maps to silence so a bad sample can
/// never reach the output buffer.
#[inline]
pub fn hard_clip(sample: f32, threshold: f32) -> f32 {
    if sample.is_nan() {
        return 0.0;
    }
    sample.clamp(-threshold, threshold)
}

/// Apply drive to an entire buffer in place.
pub fn drive_buffer(buffer: &mut [f32], amount: f32) {
    for sample in buffer.iter_mut() {
        *sample = drive(*sample, amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_drive_is_exact_passthrough() {
        for &x in &[-2.5, -0.3, 0.0, 0.1, 0.99, 4.0] {
            assert_eq!(drive(x, 0.0), x);
        }
    }

    #[test]
    fn full_drive_is_bounded_by_trim() {
        // trim at drive 1.0 = 1 / 2.5 = 0.4
        for &x in &[-10.0, -1.0, 1.0, 10.0] {
            let y = drive(x, 1.0);
            assert!(y.abs() <= 0.4 + 1e-6, "drive({x}) = {y}");
        }
        assert!((drive(10.0, 1.0) - 0.4).abs() < 1e-4);
    }

    #[test]
    fn drive_preserves_sign() {
        assert!(drive(0.2, 0.5) > 0.0);
        assert!(drive(-0.2, 0.5) < 0.0);
    }

    #[test]
    fn drive_buffer_matches_per_sample() {
        let mut buffer = [0.1, -0.4, 0.8];
        drive_buffer(&mut buffer, 0.4);
        assert_eq!(buffer[1], drive(-0.4, 0.4));
    }

    #[test]
    fn hard_clip_limits_and_scrubs_nan() {
        assert_eq!(hard_clip(1.6, 1.0), 1.0);
        assert_eq!(hard_clip(-3.0, 1.0), -1.0);
        assert!((hard_clip(0.3, 1.0) - 0.3).abs() < 1e-6);
        assert_eq!(hard_clip(f32::NAN, 1.0), 0.0);
        assert_eq!(hard_clip(f32::INFINITY, 1.0), 1.0);
    }
}
