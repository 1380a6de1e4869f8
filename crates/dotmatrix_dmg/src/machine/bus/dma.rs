use super::super::render::LineRenderer;
use super::{GameBoyBus, OAM_SIZE};

/// Bus cycles the CPU is locked out for after an OAM DMA trigger.
const DMA_CYCLES: u32 = 680;

/// Highest usable source page; $E0–$FF would alias echo RAM and I/O.
const DMA_MAX_SOURCE_PAGE: u8 = 0xDF;

impl<R: LineRenderer> GameBoyBus<R> {
    /// OAM DMA: copy 160 bytes from `XX00..XX9F` to `FE00..FE9F`.
    ///
    /// The copy happens at once so OAM holds the right values immediately;
    /// the 680-cycle countdown then models the bus being unavailable to the
    /// CPU for the duration of the transfer.
    pub(super) fn start_oam_dma(&mut self, value: u8) {
        self.dma_source = value;
        let base = (value.min(DMA_MAX_SOURCE_PAGE) as u16) << 8;
        for offset in 0..OAM_SIZE as u16 {
            self.oam[offset as usize] = self.read8_mmio(base + offset);
        }
        self.dma_cycles_remaining = DMA_CYCLES;
        log::debug!("OAM DMA from 0x{:04X}", base);
    }

    #[inline]
    pub(super) fn dma_active(&self) -> bool {
        self.dma_cycles_remaining > 0
    }
}
