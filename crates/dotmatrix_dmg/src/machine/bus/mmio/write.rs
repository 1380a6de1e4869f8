use super::super::super::render::LineRenderer;
use super::super::GameBoyBus;
use super::{wram_index, BOOT_OFF, DMA, IF, INTERRUPT_MASK, P1, SB, SC};

impl<R: LineRenderer> GameBoyBus<R> {
    /// Decode a write with no DMA restriction. VRAM and OAM are still
    /// gated by the display mode.
    pub(in super::super) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => self.cartridge.write(addr, value),
            0x8000..=0x9FFF => {
                if self.lcd.vram_writable() {
                    self.vram[(addr - 0x8000) as usize] = value;
                } else {
                    log::trace!("VRAM write 0x{:04X} dropped in mode 3", addr);
                }
            }
            0xA000..=0xBFFF => self.cartridge.write(addr, value),
            0xC000..=0xFDFF => self.wram[wram_index(addr)] = value,
            0xFE00..=0xFE9F => {
                if self.lcd.oam_writable() {
                    self.oam[(addr - 0xFE00) as usize] = value;
                } else {
                    log::trace!("OAM write 0x{:04X} dropped in {:?}", addr, self.lcd.mode());
                }
            }
            0xFEA0..=0xFEFF => {}
            0xFF00..=0xFF7F => self.write_io(addr, value),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,
            0xFFFF => self.ie_reg = value,
        }
    }

    fn write_io(&mut self, addr: u16, value: u8) {
        match addr {
            P1 => self.joypad.write(value),
            SB => self.serial.sb = value,
            SC => {
                let irq = self.serial.write_sc(value);
                self.if_reg |= irq.bits();
            }
            0xFF04..=0xFF07 => {
                let irq = self.timer.write(addr, value);
                self.if_reg |= irq.bits();
            }
            IF => self.if_reg = value & INTERRUPT_MASK,
            DMA => self.start_oam_dma(value),
            0xFF40..=0xFF4B => self.lcd.write_register(addr, value),
            BOOT_OFF => {
                if value & 0x01 != 0 && self.boot_rom.take().is_some() {
                    log::info!("boot ROM unmapped");
                }
            }
            _ => log::trace!("write 0x{:02X} to unmapped I/O 0x{:04X}", value, addr),
        }
    }
}
