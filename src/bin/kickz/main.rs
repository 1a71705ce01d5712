//! kickz - plays a factory kick preset on the default output device
//!
//! Run with: cargo run --bin kickz -- [preset 0-4] [bpm]

mod app;

use app::Player;
use color_eyre::eyre::{eyre, Result, WrapErr};
use kickz_dsp::patch::PRESET_COUNT;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    color_eyre::install()?;
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .wrap_err("failed to install logger")?;

    let mut args = std::env::args().skip(1);
    let preset = match args.next() {
        Some(arg) => arg
            .parse::<u8>()
            .wrap_err_with(|| format!("preset must be a number, got {arg:?}"))?,
        None => 0,
    };
    if usize::from(preset) >= PRESET_COUNT {
        return Err(eyre!("preset {preset} out of range 0..{PRESET_COUNT}"));
    }
    let bpm = match args.next() {
        Some(arg) => arg
            .parse::<f64>()
            .wrap_err_with(|| format!("bpm must be a number, got {arg:?}"))?,
        None => 120.0,
    };

    Player::new(preset).bpm(bpm).run()
}
