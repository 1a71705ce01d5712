//! The audio-thread entry points must never touch the allocator.

#![cfg(feature = "rtrb")]

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use kickz_dsp::{params::ParamId, KickSynth, SynthMessage};
use rtrb::RingBuffer;

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn count() {
    let _ = ALLOCATIONS.try_with(|n| n.set(n.get() + 1));
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        count();
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        count();
        System.alloc_zeroed(layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        count();
        System.realloc(ptr, layout, new_size)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn allocations_during(f: impl FnOnce()) -> usize {
    let before = ALLOCATIONS.with(Cell::get);
    f();
    ALLOCATIONS.with(Cell::get) - before
}

#[test]
fn control_and_render_paths_do_not_allocate() {
    let mut synth = KickSynth::new();
    let mut out = vec![0.0f32; 512 * 2];
    let (mut tx, mut rx) = RingBuffer::<SynthMessage>::new(16);

    let direct = allocations_during(|| {
        for preset in 0..5 {
            synth.load_preset(preset);
            synth.set_parameter(ParamId::Osc2Waveform as u8, 4);
            synth.set_parameter(ParamId::FilterEnabled as u8, 1);
            synth.set_parameter(7, 99);
            synth.note_on(36, 127);
            synth.render(&mut out, 512);
            synth.note_off(36);
            synth.gate_on(100);
            synth.pitch_bend(0x2000);
            synth.render(&mut out, 512);
            synth.all_note_off();
            let _ = synth.parameter_str_value(ParamId::Osc2Waveform as u8, 2);
            let _ = synth.parameter_bmp_value(ParamId::Osc2Waveform as u8, 2);
            synth.reset();
        }
    });
    assert_eq!(direct, 0, "direct control path allocated");

    let queued = allocations_during(|| {
        for preset in 0..5u8 {
            let _ = tx.push(SynthMessage::LoadPreset { index: preset });
            let _ = tx.push(SynthMessage::NoteOn { note: 36, velocity: 127 });
            let _ = tx.push(SynthMessage::SetParameter { index: 0, value: 90 });
            synth.render_with(&mut rx, &mut out, 512);
            let _ = tx.push(SynthMessage::GateOff);
            synth.render_with(&mut rx, &mut out, 512);
        }
    });
    assert_eq!(queued, 0, "queued control path allocated");
}
