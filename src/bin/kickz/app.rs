//! Audio setup and the trigger loop.

use std::{thread, time::Duration};

use color_eyre::eyre::{eyre, Result, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info, warn};
use rtrb::RingBuffer;

use kickz_dsp::{KickSynth, RuntimeDesc, SynthMessage, OUTPUT_CHANNELS, SAMPLE_RATE};

const QUEUE_CAPACITY: usize = 64;
const KICK_NOTE: u8 = 36;

pub struct Player {
    preset: u8,
    bpm: f64,
}

impl Player {
    pub fn new(preset: u8) -> Self {
        Self { preset, bpm: 120.0 }
    }

    pub fn bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    /// Open the output stream and trigger a kick on every beat until killed.
    pub fn run(self) -> Result<()> {
        if !(self.bpm.is_finite() && self.bpm > 0.0) {
            return Err(eyre!("bpm must be positive, got {}", self.bpm));
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;

        let config = cpal::StreamConfig {
            channels: OUTPUT_CHANNELS as cpal::ChannelCount,
            sample_rate: cpal::SampleRate(SAMPLE_RATE as u32),
            buffer_size: cpal::BufferSize::Default,
        };

        let mut synth = KickSynth::new();
        synth
            .init(&RuntimeDesc {
                sample_rate: config.sample_rate.0,
                output_channels: usize::from(config.channels),
            })
            .wrap_err("engine rejected the stream configuration")?;
        synth.load_preset(self.preset);
        info!(
            "preset {} \"{}\" at {} bpm",
            self.preset,
            KickSynth::preset_name(self.preset),
            self.bpm
        );

        let (mut tx, mut rx) = RingBuffer::<SynthMessage>::new(QUEUE_CAPACITY);

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _| {
                    let frames = data.len() / OUTPUT_CHANNELS;
                    synth.render_with(&mut rx, data, frames);
                },
                |err| error!("audio stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;
        stream.play().wrap_err("failed to start output stream")?;
        info!("playing, press Ctrl+C to stop");

        let beat = Duration::from_secs_f64(60.0 / self.bpm);
        loop {
            let hit = SynthMessage::NoteOn {
                note: KICK_NOTE,
                velocity: 127,
            };
            if tx.push(hit).is_err() {
                warn!("control queue full, dropping trigger");
            }
            thread::sleep(beat);
        }
    }
}
