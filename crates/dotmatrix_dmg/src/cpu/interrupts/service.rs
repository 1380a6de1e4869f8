use super::super::{Bus, Cpu};
use super::Interrupt;

impl Cpu {
    /// Wake from HALT/STOP and dispatch a pending interrupt.
    ///
    /// Any source set in both IE and IF wakes the CPU, even with IME clear;
    /// only with IME set is the source actually serviced. Returns the cycles
    /// spent when a dispatch happened.
    pub(in crate::cpu) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let pending = bus.interrupt_enable() & bus.interrupt_flag();
        let interrupt = Interrupt::highest_priority(pending)?;

        if self.halted || self.stopped {
            log::trace!("CPU woken by {:?} (ime={})", interrupt, self.ime);
            self.halted = false;
            self.stopped = false;
        }

        if !self.ime {
            return None;
        }

        // Entry sequence: two internal wait cycles, the PC push, then the
        // jump to the vector. 20 T-cycles in total.
        self.ime = false;
        bus.clock(8);

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        bus.clock(8);

        self.regs.pc = interrupt.vector();
        bus.clock(4);

        let remaining = bus.interrupt_flag() & !interrupt.bits();
        bus.set_interrupt_flag(remaining);

        log::debug!(
            "CPU interrupt: {:?} vector=0x{:04X} return=0x{:04X} sp=0x{:04X}",
            interrupt,
            self.regs.pc,
            pc,
            self.regs.sp,
        );

        Some(20)
    }
}
