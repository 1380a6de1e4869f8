//! Sharp LR35902 instruction engine.
//!
//! The CPU owns its register file and the interrupt master enable. All
//! memory, the interrupt enable/request masks and the passage of time live
//! behind the [`Bus`] trait: every `step` hands the bus the exact number of
//! T-cycles the hardware would spend, and the bus forwards them to the
//! display and timer.

mod alu;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use interrupts::Interrupt;
pub use regs::{Flag, Registers};

use crate::CpuError;

/// Abstraction over the memory bus as seen by the CPU.
///
/// `read16`/`write16` are little-endian in memory (low byte at `addr`).
/// `write16` stores the high byte first, at `addr + 1`, matching the order
/// in which PUSH and interrupt entry drive the bus.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr.wrapping_add(1), hi);
        self.write8(addr, lo);
    }

    /// Advance bus-side peripherals (display, timer, DMA) by `cycles`
    /// T-cycles.
    ///
    /// Default implementation does nothing so that flat test buses can
    /// ignore time entirely.
    fn clock(&mut self, _cycles: u32) {}

    /// Interrupt Enable mask (IE, $FFFF). Only the low 5 bits matter.
    fn interrupt_enable(&self) -> u8;

    /// Pending interrupt requests (IF, $FF0F). Only the low 5 bits matter.
    fn interrupt_flag(&self) -> u8;

    fn set_interrupt_flag(&mut self, value: u8);
}

/// CPU core: registers plus the control latches that decide what the next
/// `step` does.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Nothing is clocked while this is set.
    pub stopped: bool,
    /// EI was executed; IME turns on after the following instruction.
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Set once an illegal opcode has been fetched. The CPU never executes
    /// again until `reset`.
    locked: Option<CpuError>,
}

#[cfg(test)]
mod tests;
