use super::super::{render::LineRenderer, Joypad, Lcd, MachineConfig};
use super::{GameBoyBus, Serial, Timer};

impl<R: LineRenderer> GameBoyBus<R> {
    /// Return every device except the cartridge and renderer to its initial
    /// state.
    ///
    /// With a boot image the bus starts at power-on (display off, boot
    /// overlay mapped); without one it starts where the boot ROM would have
    /// left it.
    pub fn reset(&mut self, config: &MachineConfig) {
        self.boot_rom = config.boot_rom.clone();
        self.vram.fill(0);
        self.wram.fill(0);
        self.oam.fill(0);
        self.hram.fill(0);
        self.lcd = Lcd::power_on();
        self.timer = Timer::new(0);
        self.serial = Serial::new(0);
        self.joypad = Joypad::default();
        self.ie_reg = 0;
        self.if_reg = 0;
        self.dma_source = 0;
        self.dma_cycles_remaining = 0;

        if config.randomize_ram {
            self.randomize_internal_ram();
        }
        if self.boot_rom.is_none() {
            self.apply_post_boot_io_state();
        }
    }

    /// I/O state the DMG boot ROM leaves behind at PC=0x0100.
    pub(super) fn apply_post_boot_io_state(&mut self) {
        self.lcd = Lcd::new();
        // DIV reads 0xAB.
        self.timer = Timer::new(0xABCC);
        self.serial = Serial::new(0x7E);
        // The boot ROM's last VBlank request is still pending.
        self.if_reg = 0x01;
        self.dma_source = 0xFF;
    }

    /// Fill WRAM and HRAM with pseudo-random bytes.
    ///
    /// These areas hold garbage at power-on. A fixed-seed xorshift keeps runs
    /// reproducible while still discouraging code from relying on zeros.
    pub(super) fn randomize_internal_ram(&mut self) {
        let mut x: u32 = 0xC0DE_1234;
        let mut next_byte = || {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        };

        for byte in self.wram.iter_mut() {
            *byte = next_byte();
        }
        for byte in self.hram.iter_mut() {
            *byte = next_byte();
        }
    }
}
