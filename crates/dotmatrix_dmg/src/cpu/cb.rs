use super::alu::ShiftOp;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute a CB-prefixed instruction (rotates, shifts, BIT/RES/SET).
    ///
    /// The returned cycle count includes the prefix fetch.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(bus, z);

        match x {
            0 => {
                let result = self.alu_shift(ShiftOp::from_index(y), value);
                self.write_reg8(bus, z, result);
                if z == 6 { 16 } else { 8 }
            }
            1 => {
                // No write-back.
                self.alu_bit(y, value);
                if z == 6 { 16 } else { 8 }
            }
            2 => {
                self.write_reg8(bus, z, value & !(1 << y));
                if z == 6 { 16 } else { 8 }
            }
            _ => {
                self.write_reg8(bus, z, value | (1 << y));
                if z == 6 { 16 } else { 8 }
            }
        }
    }
}
