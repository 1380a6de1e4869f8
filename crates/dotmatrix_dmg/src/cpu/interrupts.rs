mod ime;
mod service;

use bitflags::bitflags;

bitflags! {
    /// The five interrupt sources, as laid out in IE ($FFFF) and IF ($FF0F).
    ///
    /// Lower bits have higher priority.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Interrupt: u8 {
        const VBLANK = 0x01;
        const STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

impl Interrupt {
    /// Highest-priority source set in `pending`, if any.
    pub fn highest_priority(pending: u8) -> Option<Interrupt> {
        let pending = pending & Self::all().bits();
        if pending == 0 {
            return None;
        }
        Some(Interrupt::from_bits_truncate(1 << pending.trailing_zeros()))
    }

    /// Service routine address for a single source: 0x40, 0x48, 0x50,
    /// 0x58 or 0x60.
    pub fn vector(self) -> u16 {
        0x0040 + (self.bits().trailing_zeros() as u16) * 8
    }
}
