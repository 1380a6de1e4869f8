use super::super::Cpu;

impl Cpu {
    /// Apply the delayed IME change requested by EI.
    ///
    /// Called after every executed instruction: the EI itself arms the
    /// delay, and the instruction after it turns IME on.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
