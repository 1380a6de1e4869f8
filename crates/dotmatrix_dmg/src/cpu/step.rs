use super::{Bus, Cpu};
use crate::CpuError;

impl Cpu {
    /// Dispatch one interrupt or execute one instruction.
    ///
    /// Returns the number of T-cycles handed to `bus.clock` (0 while the CPU
    /// sits in STOP). After an illegal opcode the CPU stays locked and
    /// every call returns the same error.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        if let Some(err) = self.locked {
            return Err(err);
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            return Ok(cycles);
        }

        if self.halted {
            bus.clock(4);
            return Ok(4);
        }

        if self.stopped {
            // Nothing is clocked in STOP. A selected input line going low
            // ends it; the next step resumes fetching.
            if bus.read8(0xFF00) & 0x0F != 0x0F {
                log::debug!("CPU left STOP on input at PC=0x{:04X}", self.regs.pc);
                self.stopped = false;
            }
            return Ok(0);
        }

        let opcode = self.fetch8(bus);
        let cycles = match self.exec_opcode(bus, opcode) {
            Ok(cycles) => cycles,
            Err(err) => {
                self.locked = Some(err);
                return Err(err);
            }
        };

        bus.clock(cycles);
        self.apply_ime_delay();
        Ok(cycles)
    }
}
