use std::path::PathBuf;

use anyhow::{Context, Result};
use dotmatrix_dmg::{SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: dotmatrix <rom_path> [frames] [out_rgb24_path]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let frames: u32 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count '{arg}'"))?,
        None => 60,
    };
    let out_path = args.next().map(PathBuf::from);
    let boot_rom = std::env::var_os("DOTMATRIX_BOOT_ROM").map(PathBuf::from);

    let summary = dotmatrix::run_file(&rom_path, boot_rom.as_deref(), frames)?;

    if !summary.serial.is_empty() {
        println!("{}", String::from_utf8_lossy(&summary.serial));
    }

    if let Some(out_path) = out_path {
        std::fs::write(&out_path, &summary.framebuffer)
            .with_context(|| format!("failed to write '{}'", out_path.display()))?;
        println!(
            "Wrote {} bytes ({}x{} rgb24) after {} frames to '{}'",
            summary.framebuffer.len(),
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            summary.frames,
            out_path.display()
        );
    } else {
        log::info!("ran {} frames ({} cycles)", summary.frames, summary.cycles);
    }

    Ok(())
}
