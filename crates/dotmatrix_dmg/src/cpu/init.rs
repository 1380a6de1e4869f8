use crate::CpuError;

use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in the state the DMG boot ROM leaves behind when it
    /// hands control to the cartridge at 0x0100.
    pub fn new() -> Self {
        let mut cpu = Self::power_on();
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Create a CPU in its raw power-on state (all registers zero, PC=0).
    ///
    /// Used when a boot ROM image is mapped over the start of the cartridge
    /// and is expected to do its own initialisation.
    pub fn power_on() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            locked: None,
        }
    }

    /// Reset to the post-boot state and clear a previous lock-up.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the error that locked the CPU, if any.
    pub fn locked(&self) -> Option<CpuError> {
        self.locked
    }

    /// Register values after the DMG boot ROM (Pan Docs, "Power Up
    /// Sequence").
    fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0;
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
        // The cartridge is responsible for enabling interrupts via EI/RETI.
        self.ime = false;
    }
}
