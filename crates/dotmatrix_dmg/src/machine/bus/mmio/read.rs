use super::super::super::render::LineRenderer;
use super::super::{GameBoyBus, OPEN_BUS};
use super::{wram_index, BOOT_OFF, DMA, IF, INTERRUPT_MASK, P1, SB, SC};

impl<R: LineRenderer> GameBoyBus<R> {
    /// Decode a read with no DMA restriction.
    pub(in super::super) fn read8_mmio(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x00FF if self.boot_rom.is_some() => self.read_boot_rom(addr),
            0x0000..=0x7FFF => self.cartridge.read(addr),
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],
            0xA000..=0xBFFF => self.cartridge.read(addr),
            0xC000..=0xFDFF => self.wram[wram_index(addr)],
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize],
            0xFEA0..=0xFEFF => OPEN_BUS,
            0xFF00..=0xFF7F => self.read_io(addr),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.ie_reg,
        }
    }

    fn read_boot_rom(&self, addr: u16) -> u8 {
        self.boot_rom
            .as_deref()
            .and_then(|rom| rom.get(addr as usize).copied())
            .unwrap_or(OPEN_BUS)
    }

    fn read_io(&self, addr: u16) -> u8 {
        match addr {
            P1 => self.joypad.read(),
            SB => self.serial.sb,
            SC => self.serial.read_sc(),
            0xFF04..=0xFF07 => self.timer.read(addr),
            IF => 0xE0 | (self.if_reg & INTERRUPT_MASK),
            DMA => self.dma_source,
            0xFF40..=0xFF4B => self.lcd.read_register(addr),
            BOOT_OFF => 0xFE | u8::from(self.boot_rom.is_none()),
            _ => {
                log::trace!("read from unmapped I/O 0x{:04X}", addr);
                OPEN_BUS
            }
        }
    }
}
