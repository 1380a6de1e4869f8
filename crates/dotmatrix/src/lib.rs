//! Headless driver for the dotmatrix DMG core.
//!
//! Loads a program image, runs it for a fixed number of frames and hands back
//! the last composed frame and anything the program wrote to the serial port.

use std::path::Path;

use anyhow::{Context, Result};
use dotmatrix_dmg::{GameBoy, LineRenderer, MachineConfig};

mod render;

pub use render::ShadeRenderer;

/// What a headless run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub frames: u32,
    pub cycles: u64,
    /// RGB24 framebuffer of the last completed frame.
    pub framebuffer: Vec<u8>,
    pub serial: Vec<u8>,
}

/// Drive `gb` for `frames` frames. Returns the T-cycles consumed.
///
/// A CPU fault is fatal and is reported with the frame it happened in.
pub fn run_frames<R: LineRenderer>(gb: &mut GameBoy<R>, frames: u32) -> Result<u64> {
    let mut cycles = 0u64;
    for frame in 0..frames {
        let elapsed = gb
            .step_frame()
            .with_context(|| format!("CPU fault during frame {}", frame))?;
        cycles += u64::from(elapsed);
        gb.take_frame_ready();
    }
    Ok(cycles)
}

/// Run an in-memory image with the reference renderer.
pub fn run(rom: &[u8], config: MachineConfig, frames: u32) -> Result<RunSummary> {
    let mut gb = GameBoy::with_renderer(config, ShadeRenderer::default());
    gb.load_rom(rom);
    log::info!(
        "running '{}' (type 0x{:02X}) for {} frames",
        gb.bus().cartridge().title(),
        gb.bus().cartridge().cartridge_type(),
        frames
    );

    let cycles = run_frames(&mut gb, frames)?;

    Ok(RunSummary {
        frames,
        cycles,
        framebuffer: gb.renderer().framebuffer().to_vec(),
        serial: gb.take_serial_output(),
    })
}

/// Load a program image (and optional boot image) from disk and run it.
pub fn run_file(rom_path: &Path, boot_rom: Option<&Path>, frames: u32) -> Result<RunSummary> {
    let rom = std::fs::read(rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let config = match boot_rom {
        Some(path) => {
            let boot = std::fs::read(path)
                .with_context(|| format!("failed to read boot ROM '{}'", path.display()))?;
            MachineConfig::builder().boot_rom(boot).build()
        }
        None => MachineConfig::default(),
    };

    run(&rom, config, frames)
}
