use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_push_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        // PUSH/POP use AF where the other pair tables use SP.
        let value = match (opcode >> 4) & 0x03 {
            3 => self.regs.af(),
            rp => self.regs.rp(rp),
        };

        self.push_u16(bus, value);
        16
    }

    pub(super) fn exec_pop_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus);
        match (opcode >> 4) & 0x03 {
            3 => self.regs.set_af(value),
            rp => self.regs.set_rp(rp, value),
        }

        12
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        8
    }
}
