use crate::cpu::Interrupt;

/// Divider and timer (DIV/TIMA/TMA/TAC).
///
/// DIV is the upper byte of a 16-bit system counter that advances every
/// T-cycle. TIMA counts falling edges of the counter bit selected by TAC,
/// gated by TAC bit 2, and reloads from TMA on overflow.
pub(super) struct Timer {
    counter: u16,
    tima: u8,
    tma: u8,
    tac: u8,
}

impl Timer {
    pub(super) fn new(counter: u16) -> Self {
        Self {
            counter,
            tima: 0,
            tma: 0,
            tac: 0,
        }
    }

    /// TAC[1:0] → counter bit: 00 = 4096 Hz, 01 = 262144 Hz,
    /// 10 = 65536 Hz, 11 = 16384 Hz.
    #[inline]
    fn input_bit(&self) -> bool {
        let mask = match self.tac & 0x03 {
            0x00 => 1u16 << 9,
            0x01 => 1u16 << 3,
            0x02 => 1u16 << 5,
            _ => 1u16 << 7,
        };
        self.tac & 0x04 != 0 && self.counter & mask != 0
    }

    fn increment_tima(&mut self) -> Interrupt {
        let (next, overflow) = self.tima.overflowing_add(1);
        if overflow {
            self.tima = self.tma;
            Interrupt::TIMER
        } else {
            self.tima = next;
            Interrupt::empty()
        }
    }

    pub(super) fn clock(&mut self, cycles: u32) -> Interrupt {
        let mut requested = Interrupt::empty();
        for _ in 0..cycles {
            let before = self.input_bit();
            self.counter = self.counter.wrapping_add(1);
            if before && !self.input_bit() {
                requested |= self.increment_tima();
            }
        }
        requested
    }

    pub(super) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF04 => (self.counter >> 8) as u8,
            0xFF05 => self.tima,
            0xFF06 => self.tma,
            0xFF07 => self.tac | 0xF8,
            _ => 0xFF,
        }
    }

    /// Writes to DIV and TAC can produce a falling edge on the selected
    /// counter bit, which increments TIMA just like a normal tick.
    pub(super) fn write(&mut self, addr: u16, value: u8) -> Interrupt {
        let before = self.input_bit();
        match addr {
            0xFF04 => self.counter = 0,
            0xFF05 => self.tima = value,
            0xFF06 => self.tma = value,
            0xFF07 => self.tac = value & 0x07,
            _ => return Interrupt::empty(),
        }
        if before && !self.input_bit() {
            self.increment_tima()
        } else {
            Interrupt::empty()
        }
    }
}
