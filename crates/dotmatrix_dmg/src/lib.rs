pub mod cpu;
mod error;
pub mod machine;

pub use cpu::{Bus, Cpu, Flag, Interrupt, Registers};
pub use error::CpuError;
pub use machine::{
    Button, Cartridge, GameBoy, GameBoyBus, Lcd, LcdMode, LineContext, LineRegisters,
    LineRenderer, MachineConfig, NullRenderer,
};

/// Logical screen width in pixels for the DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// T-cycles in one full frame (154 scanlines of 456 cycles).
pub const CYCLES_PER_FRAME: u32 = 70_224;
