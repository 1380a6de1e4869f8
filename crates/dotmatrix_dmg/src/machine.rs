//! Everything on the far side of the CPU's bus: the address router and the
//! devices it owns, plus the [`GameBoy`] facade that ties them to a CPU.

mod bus;
mod cartridge;
mod config;
mod gameboy;
mod joypad;
mod lcd;
mod render;
mod serial;
mod timer;

pub use bus::{GameBoyBus, OPEN_BUS};
pub use cartridge::Cartridge;
pub use config::MachineConfig;
pub use gameboy::GameBoy;
pub use joypad::{Button, Joypad};
pub use lcd::{Lcd, LcdControl, LcdEvents, LcdMode, StatSource};
pub use render::{LineContext, LineRegisters, LineRenderer, NullRenderer};
