use crate::cpu::{Bus, Cpu};
use crate::{CpuError, CYCLES_PER_FRAME};

use super::{Button, Cartridge, GameBoyBus, LineRenderer, MachineConfig, NullRenderer};

/// High-level DMG machine.
///
/// Holds the CPU core and the bus. The driver loop calls [`GameBoy::step`]
/// or [`GameBoy::step_frame`] and polls [`GameBoy::take_frame_ready`] to
/// pace presentation.
pub struct GameBoy<R: LineRenderer = NullRenderer> {
    pub cpu: Cpu,
    bus: GameBoyBus<R>,
    config: MachineConfig,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self::with_renderer(config, NullRenderer)
    }
}

impl<R: LineRenderer> GameBoy<R> {
    pub fn with_renderer(config: MachineConfig, renderer: R) -> Self {
        let cpu = if config.boot_rom.is_some() {
            Cpu::power_on()
        } else {
            Cpu::new()
        };
        Self {
            cpu,
            bus: GameBoyBus::new(&config, renderer),
            config,
        }
    }

    /// Put a cartridge built from a raw program image into the slot.
    pub fn load_rom(&mut self, rom: &[u8]) {
        self.insert_cartridge(Cartridge::from_rom(rom));
    }

    pub fn insert_cartridge(&mut self, cartridge: Cartridge) {
        self.bus.insert_cartridge(cartridge);
    }

    /// Power-cycle CPU and bus, keeping the cartridge and renderer.
    pub fn reset(&mut self) {
        self.cpu = if self.config.boot_rom.is_some() {
            Cpu::power_on()
        } else {
            Cpu::new()
        };
        self.bus.reset(&self.config);
    }

    /// Execute one instruction (or one interrupt dispatch, or one HALT
    /// tick). Returns the T-cycles handed to the bus.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        self.cpu.step(&mut self.bus)
    }

    /// Run until the display signals a finished frame or one frame's worth
    /// of cycles has elapsed. Returns the cycles consumed.
    ///
    /// The frame-ready signal is left set for [`GameBoy::take_frame_ready`].
    pub fn step_frame(&mut self) -> Result<u32, CpuError> {
        let mut elapsed = 0u32;
        while elapsed < CYCLES_PER_FRAME {
            let cycles = self.step()?;
            elapsed += cycles;
            if self.bus.lcd().frame_ready() {
                break;
            }
            if cycles == 0 {
                // STOP with no wake source: time is frozen.
                log::trace!("CPU stopped, ending frame early");
                break;
            }
        }
        Ok(elapsed)
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.bus.set_button(button, pressed);
    }

    /// Consume the frame-ready signal.
    pub fn take_frame_ready(&mut self) -> bool {
        self.bus.lcd_mut().take_frame_ready()
    }

    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial_output()
    }

    pub fn take_serial_output(&mut self) -> Vec<u8> {
        self.bus.take_serial_output()
    }

    pub fn bus(&self) -> &GameBoyBus<R> {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut GameBoyBus<R> {
        &mut self.bus
    }

    pub fn renderer(&self) -> &R {
        self.bus.renderer()
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        self.bus.renderer_mut()
    }

    /// Read a byte through the bus as the CPU would (DMA blocking applies).
    pub fn read8(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value);
    }
}
