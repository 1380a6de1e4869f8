use super::super::render::{LineContext, LineRenderer};
use super::mmio::INTERRUPT_MASK;
use super::{GameBoyBus, OPEN_BUS};
use crate::cpu::Bus;

#[inline]
fn is_hram(addr: u16) -> bool {
    (0xFF80..=0xFFFE).contains(&addr)
}

impl<R: LineRenderer> Bus for GameBoyBus<R> {
    fn read8(&mut self, addr: u16) -> u8 {
        if self.dma_active() && !is_hram(addr) {
            return OPEN_BUS;
        }
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        if self.dma_active() && !is_hram(addr) {
            log::trace!("write to 0x{:04X} blocked by OAM DMA", addr);
            return;
        }
        self.write8_mmio(addr, value);
    }

    fn clock(&mut self, cycles: u32) {
        self.dma_cycles_remaining = self.dma_cycles_remaining.saturating_sub(cycles);

        // Split borrows: the display owns its timing state while the renderer
        // looks at VRAM and OAM.
        let Self {
            lcd,
            renderer,
            vram,
            oam,
            ..
        } = self;
        let (vram, oam) = (&*vram, &*oam);
        let events = lcd.clock(cycles, |registers| {
            renderer.render_line(&LineContext {
                registers,
                vram,
                oam,
            });
        });
        if events.frame_completed {
            self.renderer.frame_ready();
        }

        let timer_irq = self.timer.clock(cycles);
        self.if_reg |= (events.interrupts | timer_irq).bits();
    }

    fn interrupt_enable(&self) -> u8 {
        self.ie_reg
    }

    fn interrupt_flag(&self) -> u8 {
        self.if_reg & INTERRUPT_MASK
    }

    fn set_interrupt_flag(&mut self, value: u8) {
        self.if_reg = value & INTERRUPT_MASK;
    }
}
