//! Display strings and 16x16 bitmaps for the host's parameter screen.

use crate::dsp::oscillator::WAVEFORM_COUNT;

/// Shown for any index without a name.
pub const PLACEHOLDER: &str = "---";

pub const WAVEFORM_NAMES: [&str; WAVEFORM_COUNT] = ["Sine", "Saw", "Triangle", "Pulse", "Noise"];

/// One 1-bit 16x16 glyph per waveform, two bytes per row.
pub type Bitmap = [u8; 32];

pub static WAVEFORM_BITMAPS: [Bitmap; WAVEFORM_COUNT] = [
    // Sine
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x03, 0x0C, 0x0C, 0x02, 0x10, 0x01, 0x20, 0x01, 0x40,
        0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x00, 0x20, 0x01, 0x10, 0x01, 0x0C, 0x02, 0x03, 0x0C,
        0x00, 0xF0,
    ],
    // Saw
    [
        0x00, 0x00, 0x80, 0x00, 0x40, 0x01, 0x20, 0x02, 0x10, 0x04, 0x08, 0x08, 0x04, 0x10, 0x02,
        0x20, 0x01, 0x40, 0x00, 0x80, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    // Triangle
    [
        0x00, 0x00, 0x00, 0x80, 0x00, 0x40, 0x00, 0x20, 0x00, 0x10, 0x00, 0x08, 0x00, 0x04, 0x00,
        0x02, 0x00, 0x01, 0x80, 0x00, 0x40, 0x00, 0x20, 0x00, 0x10, 0x00, 0x08, 0x00, 0x04, 0x00,
        0x02, 0x00,
    ],
    // Pulse
    [
        0x00, 0x00, 0xFF, 0x7F, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01,
        0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0xFF, 0x7F,
        0x00, 0x00,
    ],
    // Noise
    [
        0x00, 0x00, 0x24, 0x82, 0x58, 0x25, 0xA2, 0x50, 0x14, 0x8A, 0x42, 0x51, 0x85, 0x24, 0x50,
        0x8A, 0x24, 0x51, 0x82, 0x24, 0x50, 0x8A, 0x24, 0x51, 0x44, 0x2A, 0xA8, 0x14, 0x52, 0x42,
        0x00, 0x00,
    ],
];

/// Waveform name for a selector value, or the placeholder.
pub fn waveform_name(value: i32) -> &'static str {
    usize::try_from(value)
        .ok()
        .and_then(|i| WAVEFORM_NAMES.get(i))
        .copied()
        .unwrap_or(PLACEHOLDER)
}

/// Waveform bitmap for a selector value; falls back to the sine glyph.
pub fn waveform_bitmap(value: i32) -> &'static Bitmap {
    usize::try_from(value)
        .ok()
        .and_then(|i| WAVEFORM_BITMAPS.get(i))
        .unwrap_or(&WAVEFORM_BITMAPS[0])
}
