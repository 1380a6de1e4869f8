use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        // STOP is a 2-byte instruction; the padding byte is discarded.
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
        log::debug!("CPU entered STOP at PC=0x{:04X}", self.regs.pc);
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
        4
    }
}
