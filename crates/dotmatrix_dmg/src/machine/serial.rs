use crate::cpu::Interrupt;

/// Serial port (SB/SC) with no link partner attached.
///
/// A transfer started with the internal clock completes immediately: the
/// outgoing byte is captured in `output` and SB reads back 0xFF, as it would
/// with nothing plugged into the link port.
#[derive(Debug)]
pub(crate) struct Serial {
    pub(crate) sb: u8,
    sc: u8,
    pub(crate) output: Vec<u8>,
}

impl Serial {
    pub(super) fn new(sc: u8) -> Self {
        Self {
            sb: 0,
            sc,
            output: Vec::new(),
        }
    }

    /// Hand over everything captured so far and start a fresh buffer.
    pub(super) fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    pub(super) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }

    pub(super) fn write_sc(&mut self, value: u8) -> Interrupt {
        self.sc = value;
        // Internal clock & start bit set?
        if self.sc & 0x81 == 0x81 {
            self.output.push(self.sb);
            self.sb = 0xFF;
            self.sc &= !0x80;
            return Interrupt::SERIAL;
        }
        Interrupt::empty()
    }
}
