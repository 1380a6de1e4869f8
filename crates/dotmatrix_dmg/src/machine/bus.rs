use super::{
    cartridge::Cartridge, joypad::Joypad, lcd::Lcd, render::LineRenderer, serial::Serial,
    timer::Timer, Button, MachineConfig, NullRenderer,
};
use crate::cpu::Interrupt;

mod dma;
mod init;
mod mmio;
mod traits;

pub(super) const VRAM_SIZE: usize = 0x2000;
pub(super) const WRAM_SIZE: usize = 0x2000;
pub(super) const OAM_SIZE: usize = 0xA0;
pub(super) const HRAM_SIZE: usize = 0x7F;

/// Value seen on reads from unmapped or blocked addresses.
pub const OPEN_BUS: u8 = 0xFF;

/// System bus: the only path between the CPU and every memory-mapped
/// device.
///
/// Owns the cartridge, the RAM regions, the display timing unit, timer,
/// serial port and input latch, the IE/IF interrupt registers and the OAM
/// DMA countdown. Time advances only through [`crate::Bus::clock`].
pub struct GameBoyBus<R: LineRenderer = NullRenderer> {
    cartridge: Cartridge,
    /// Boot image overlaid on $0000–$00FF; dropped for good on the first
    /// $FF50 write with bit 0 set.
    boot_rom: Option<Vec<u8>>,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    hram: [u8; HRAM_SIZE],
    lcd: Lcd,
    timer: Timer,
    serial: Serial,
    joypad: Joypad,
    ie_reg: u8,
    if_reg: u8,
    /// Last value written to $FF46.
    dma_source: u8,
    /// T-cycles until the bus is released by OAM DMA.
    dma_cycles_remaining: u32,
    renderer: R,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        Self::new(&MachineConfig::default(), NullRenderer)
    }
}

impl<R: LineRenderer> GameBoyBus<R> {
    pub fn new(config: &MachineConfig, renderer: R) -> Self {
        let mut bus = Self {
            cartridge: Cartridge::default(),
            boot_rom: None,
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            hram: [0; HRAM_SIZE],
            lcd: Lcd::power_on(),
            timer: Timer::new(0),
            serial: Serial::new(0),
            joypad: Joypad::default(),
            ie_reg: 0,
            if_reg: 0,
            dma_source: 0,
            dma_cycles_remaining: 0,
            renderer,
        };
        bus.reset(config);
        bus
    }

    pub fn insert_cartridge(&mut self, cartridge: Cartridge) {
        log::debug!("inserting cartridge {:?}", cartridge);
        self.cartridge = cartridge;
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn lcd(&self) -> &Lcd {
        &self.lcd
    }

    pub fn lcd_mut(&mut self) -> &mut Lcd {
        &mut self.lcd
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// True while the boot image is still mapped at $0000.
    pub fn boot_rom_mapped(&self) -> bool {
        self.boot_rom.is_some()
    }

    /// Cycles left before OAM DMA releases the bus.
    pub fn dma_cycles_remaining(&self) -> u32 {
        self.dma_cycles_remaining
    }

    /// Bytes shifted out of the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.serial.output
    }

    /// Drain the captured serial bytes. Long-running programs that log over
    /// the link port should call this periodically.
    pub fn take_serial_output(&mut self) -> Vec<u8> {
        self.serial.take_output()
    }

    /// Press or release a button; a new press requests the joypad
    /// interrupt.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        if self.joypad.set_pressed(button, pressed) {
            self.request_interrupt(Interrupt::JOYPAD);
        }
    }

    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.if_reg |= interrupt.bits();
    }
}
